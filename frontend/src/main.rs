//! Yew single-page frontend for the portfolio/blog site.

mod api;
mod components;
pub mod hooks;
mod i18n;
mod language_context;
mod pages;
mod router;
mod samples;
mod seo;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <language_context::LanguageProvider>
            <router::AppRouter />
        </language_context::LanguageProvider>
    }
}

fn main() {
    // Apply the stored (or OS-preferred) theme before the first paint.
    components::theme_toggle::init_theme();
    yew::Renderer::<App>::new().render();
}
