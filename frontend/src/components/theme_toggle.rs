use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

const STORAGE_KEY: &str = "folio-theme";

fn document_element() -> Option<web_sys::Element> {
    web_sys::window().and_then(|win| win.document()).and_then(|doc| doc.document_element())
}

fn is_dark_theme() -> bool {
    document_element().map(|el| el.class_list().contains("dark")).unwrap_or(false)
}

// Tailwind's dark variant keys off a `dark` class on <html>.
fn apply_theme(dark: bool) {
    let Some(el) = document_element() else {
        return;
    };
    let class_list = el.class_list();
    if dark {
        let _ = class_list.add_1("dark");
    } else {
        let _ = class_list.remove_1("dark");
    }
}

fn persist_theme(dark: bool) {
    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, if dark { "dark" } else { "light" });
    }
}

// No stored preference means dark; only an explicit "light" switches off.
fn prefers_dark(stored: Option<String>) -> bool {
    !matches!(stored.as_deref(), Some("light"))
}

/// Restores the persisted theme. Called once before the app renders so the
/// first paint already uses the visitor's choice.
pub fn init_theme() {
    let stored = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    apply_theme(prefers_dark(stored));
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let dark = use_state(is_dark_theme);

    let onclick = {
        let dark = dark.clone();
        Callback::from(move |_| {
            let next = !*dark;
            apply_theme(next);
            persist_theme(next);
            dark.set(next);
        })
    };

    let label = if *dark { "Switch to light mode" } else { "Switch to dark mode" };

    html! {
        <button
            type="button"
            class={classes!(
                "p-2",
                "rounded-full",
                "text-gray-600",
                "dark:text-gray-300",
                "hover:bg-gray-100",
                "dark:hover:bg-slate-800",
                "transition-colors",
                props.class.clone()
            )}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={(*dark).to_string()}
        >
            {
                if *dark {
                    html! { <Icon name={IconName::Sun} size={20} /> }
                } else {
                    html! { <Icon name={IconName::Moon} size={20} /> }
                }
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::prefers_dark;

    #[test]
    fn no_stored_preference_defaults_to_dark() {
        assert!(prefers_dark(None));
    }

    #[test]
    fn stored_preference_wins() {
        assert!(!prefers_dark(Some("light".to_string())));
        assert!(prefers_dark(Some("dark".to_string())));
    }
}
