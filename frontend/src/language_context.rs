use std::rc::Rc;

use yew::prelude::*;

use crate::i18n::{self, Translations};

const STORAGE_KEY: &str = "folio-language";

/// The languages the site ships copy for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Tr,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Tr, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::De => "de",
        }
    }

    fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::En => &i18n::en::EN,
            Language::Tr => &i18n::tr::TR,
            Language::De => &i18n::de::DE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageState {
    pub language: Language,
}

impl Default for LanguageState {
    fn default() -> Self {
        Self {
            language: stored_language().unwrap_or(Language::En),
        }
    }
}

pub enum LanguageAction {
    Set(Language),
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LanguageAction::Set(language) => {
                persist_language(language);
                Rc::new(LanguageState {
                    language,
                })
            },
        }
    }
}

pub type LanguageContext = UseReducerHandle<LanguageState>;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

fn stored_language() -> Option<Language> {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
}

fn persist_language(language: Language) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, language.code());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = use_reducer(LanguageState::default);
    html! {
        <ContextProvider<LanguageContext> context={state}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

/// The active translation table, for components below the provider.
#[hook]
pub fn use_translations() -> &'static Translations {
    let context = use_context::<LanguageContext>();
    context.map(|state| state.language.translations()).unwrap_or(&i18n::en::EN)
}
