use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        theme_toggle::ThemeToggle,
    },
    language_context::{Language, LanguageAction, LanguageContext, use_translations},
    router::Route,
};

// Matches the sticky header height so anchored sections are not hidden
// behind it after a jump.
const HEADER_OFFSET: f64 = 80.0;

fn scroll_to_section(selector: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(element)) = document.query_selector(selector) else {
        return;
    };

    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - HEADER_OFFSET;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Header)]
pub fn header() -> Html {
    let t = use_translations();
    let language_ctx = use_context::<LanguageContext>();
    let active_language =
        language_ctx.as_ref().map(|ctx| ctx.language).unwrap_or(Language::En);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_home = matches!(route, Some(Route::Home));

    let mobile_menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move || {
                let scroll_y =
                    web_sys::window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0);
                scrolled.set(scroll_y > 20.0);
            }) as Box<dyn FnMut()>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    // Away from the home page the sections do not exist yet, so navigate
    // there first and jump once the page has rendered.
    let nav_onclick = |target: &'static str| {
        let navigator = navigator.clone();
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_menu_open.set(false);
            if on_home {
                scroll_to_section(target);
            } else {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Home);
                }
                Timeout::new(100, move || scroll_to_section(target)).forget();
            }
        })
    };

    let nav_items = [
        (t.nav.home, "#home"),
        (t.nav.about, "#about"),
        (t.nav.skills, "#skills"),
        (t.nav.blog, "#blog"),
        (t.nav.cover_letter, "#cover-letter"),
        (t.nav.cv, "#cv"),
        (t.nav.contact, "#contact"),
    ];

    let language_button = |lang: Language, extra: &'static str| {
        let onclick = {
            let language_ctx = language_ctx.clone();
            Callback::from(move |_| {
                if let Some(ctx) = language_ctx.as_ref() {
                    ctx.dispatch(LanguageAction::Set(lang));
                }
            })
        };
        let active = lang == active_language;
        html! {
            <button
                type="button"
                class={classes!(
                    "px-2",
                    "py-1",
                    "text-xs",
                    "font-bold",
                    "uppercase",
                    "rounded-md",
                    "transition-colors",
                    if active {
                        "text-blue-500"
                    } else {
                        "text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                    },
                    extra
                )}
                {onclick}
            >
                { lang.code() }
            </button>
        }
    };

    let header_classes = classes!(
        "fixed",
        "top-0",
        "left-0",
        "right-0",
        "z-50",
        "transition-all",
        "duration-300",
        if *scrolled {
            "bg-white/80 dark:bg-slate-900/80 backdrop-blur-lg shadow-sm py-4"
        } else {
            "bg-transparent py-6"
        }
    );

    let logo_onclick = nav_onclick("#home");

    html! {
        <>
            <header class={header_classes}>
                <div class="container mx-auto px-6 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-extrabold", "tracking-tight")}>
                        <span onclick={logo_onclick}>
                            { "Mustafa Altas" }
                            <span class="text-blue-500">{ "." }</span>
                        </span>
                    </Link<Route>>

                    // Desktop navigation
                    <nav class="hidden lg:flex items-center gap-8">
                        { for nav_items.iter().map(|(label, target)| {
                            html! {
                                <a
                                    href={*target}
                                    onclick={nav_onclick(target)}
                                    class="group relative text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-blue-500 dark:hover:text-blue-400 transition-colors"
                                >
                                    { *label }
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-blue-500 group-hover:w-full transition-all duration-300"></span>
                                </a>
                            }
                        }) }

                        <div class="w-px h-5 bg-gray-200 dark:bg-slate-700"></div>

                        <div class="flex items-center gap-1 text-gray-400">
                            <Icon name={IconName::Globe} size={16} />
                            { for Language::ALL.iter().map(|lang| language_button(*lang, "")) }
                        </div>

                        <ThemeToggle />
                    </nav>

                    // Mobile controls
                    <div class="flex lg:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-slate-800 transition-colors"
                            aria-label="Toggle menu"
                            aria-expanded={(*mobile_menu_open).to_string()}
                            onclick={toggle_mobile_menu}
                        >
                            {
                                if *mobile_menu_open {
                                    html! { <Icon name={IconName::X} size={22} /> }
                                } else {
                                    html! { <Icon name={IconName::Menu} size={22} /> }
                                }
                            }
                        </button>
                    </div>
                </div>
            </header>

            // Mobile menu overlay
            {
                if *mobile_menu_open {
                    html! {
                        <div class="fixed inset-0 z-40 lg:hidden bg-white dark:bg-slate-950 pt-24 px-8">
                            <nav class="flex flex-col gap-6">
                                { for nav_items.iter().map(|(label, target)| {
                                    html! {
                                        <a
                                            href={*target}
                                            onclick={nav_onclick(target)}
                                            class="text-2xl font-bold text-gray-800 dark:text-gray-100 hover:text-blue-500 transition-colors"
                                        >
                                            { *label }
                                        </a>
                                    }
                                }) }
                            </nav>
                            <div class="flex items-center gap-2 mt-10 text-gray-400">
                                <Icon name={IconName::Globe} size={18} />
                                { for Language::ALL.iter().map(|lang| {
                                    language_button(*lang, "border border-gray-200 dark:border-slate-700")
                                }) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
