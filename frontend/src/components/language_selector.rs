use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{Language, MessageKey};
use crate::hooks::use_language::use_language;

fn flag(language: Language) -> &'static str {
    match language {
        Language::English => "🇬🇧",
        Language::Turkish => "🇹🇷",
    }
}

/// Flag button that switches between the two supported languages
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let language = use_language();

    let on_click = {
        let set_language = language.set_language.clone();
        let next = language.language.toggled();
        Callback::from(move |_: MouseEvent| set_language.emit(next))
    };

    html! {
        <button
            class="language-button"
            title={language.t(MessageKey::SwitchLanguage)}
            lang={language.language.code()}
            onclick={on_click}
        >
            {flag(language.language)}
        </button>
    }
}
