use yew::prelude::*;
use shared::{load_language, save_language, DirectoryConfig, Language, MessageKey};
use crate::services::storage::LocalStorageBackend;

/// Active display language, shared with every component below the provider
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t(&self, key: MessageKey) -> &'static str {
        self.language.translate(key)
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub config: DirectoryConfig,
    pub children: Html,
}

/// Loads the persisted language and re-renders its children when it changes
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language_key = props.config.language_key.clone();

    let language = {
        let language_key = language_key.clone();
        let default_language = props.config.default_language;
        use_state(move || load_language(&LocalStorageBackend, &language_key, default_language))
    };

    let set_language = {
        let language = language.clone();
        use_callback(language_key, move |next: Language, language_key| {
            if let Err(e) = save_language(&LocalStorageBackend, language_key, next) {
                log::warn!(target: "language", "Failed to persist language {}: {}", next, e);
            }
            log::info!(target: "language", "Language changed to {}", next);
            language.set(next);
        })
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        language: Language::default(),
        set_language: Callback::from(|_| ()),
    })
}
