use yew::prelude::*;
use shared::{DirectoryConfig, Route};

mod components;
mod hooks;
mod services;

use components::employee_form::EmployeeFormPage;
use components::employee_list::EmployeeList;
use components::navigation_menu::NavigationMenu;
use hooks::use_language::LanguageProvider;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: DirectoryConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    // The address bar only changes through full navigations or history pushes
    // made by the list itself, so it is read once per page load
    let route = *use_memo((), |_| services::navigation::current_route());

    let page = match route {
        Route::List { page, view_mode } => html! {
            <EmployeeList page={page} view_mode={view_mode} config={props.config.clone()} />
        },
        Route::Add { .. } | Route::Edit { .. } => html! {
            <EmployeeFormPage route={route} config={props.config.clone()} />
        },
    };

    html! {
        <LanguageProvider config={props.config.clone()}>
            <NavigationMenu view_mode={route.view_mode()} />
            <main class="container">
                {page}
            </main>
        </LanguageProvider>
    }
}

fn main() {
    services::logging::init(log::LevelFilter::Info);
    let config = services::config::load_config();
    log::set_max_level(config.log_level_filter());
    log::info!(target: "app", "Starting employee directory");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
