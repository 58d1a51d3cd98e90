use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    language_context::{Language, LanguageContext},
    pages, seo,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/posts")]
    Posts,

    #[at("/posts/:id")]
    PostDetail { id: String },

    #[at("/admin")]
    Admin,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Posts => html! { <pages::posts::PostsPage /> },
        Route::PostDetail {
            id,
        } => {
            html! { <pages::post_detail::PostDetailPage id={id} /> }
        },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

/// Keeps the document head in sync with the active route and language.
/// Detail pages overwrite these tags once their post data arrives.
#[function_component(SeoSync)]
fn seo_sync() -> Html {
    let route = use_route::<Route>();
    let language =
        use_context::<LanguageContext>().map(|ctx| ctx.language).unwrap_or(Language::En);

    use_effect_with((route, language), |(route, language)| {
        seo::apply_route_seo(route.as_ref(), *language);
        || ()
    });

    html! {}
}

// Owner shortcut: Shift+A from anywhere on the public site opens the console.
#[function_component(AdminShortcut)]
fn admin_shortcut() -> Html {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.shift_key() && event.key() == "A" {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Admin);
                }
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });

    html! {}
}

#[function_component(AppLayout)]
fn app_layout() -> Html {
    let route = use_route::<Route>();

    // The console replaces the site chrome entirely.
    if matches!(route, Some(Route::Admin)) {
        return html! { <Switch<Route> render={switch} /> };
    }

    html! {
        <div class="bg-gray-50 text-gray-900 dark:bg-slate-950 dark:text-gray-100 min-h-screen transition-colors duration-300 font-sans selection:bg-blue-500 selection:text-white">
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <SeoSync />
            <AdminShortcut />
            <AppLayout />
        </BrowserRouter>
    }
}
