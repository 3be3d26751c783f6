use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{MessageKey, Route, ViewMode};
use super::language_selector::LanguageSelector;
use crate::hooks::use_language::use_language;
use crate::services::navigation;

#[derive(Properties, PartialEq)]
pub struct NavigationMenuProps {
    pub view_mode: ViewMode,
}

#[function_component(NavigationMenu)]
pub fn navigation_menu(props: &NavigationMenuProps) -> Html {
    let language = use_language();

    let first_page = Route::List {
        page: 1,
        view_mode: props.view_mode,
    };
    let add = Route::Add {
        view_mode: props.view_mode,
    };

    let on_logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigation::navigate(&first_page);
    });

    html! {
        <header class="header">
            <nav class="container">
                <a class="logo-link" href={first_page.to_href()} onclick={on_logo_click}>
                    <span class="logo">{"Employee Directory"}</span>
                </a>
                <div class="menu-actions">
                    <a href={first_page.to_href()} class="employees-btn">
                        {language.t(MessageKey::Employees)}
                    </a>
                    <a href={add.to_href()} class="add-employee-btn">
                        {"＋ "}{language.t(MessageKey::AddEmployee)}
                    </a>
                    <LanguageSelector />
                </div>
            </nav>
        </header>
    }
}
