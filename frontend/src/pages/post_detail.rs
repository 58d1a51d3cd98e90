use wasm_bindgen::{closure::Closure, JsCast};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    hooks::{use_posts, use_scroll_to_top},
    language_context::{use_translations, Language, LanguageContext},
    router::Route,
    seo,
};

#[derive(Properties, PartialEq)]
pub struct PostDetailProps {
    pub id: String,
}

/// Fraction of the page scrolled, for the reading progress bar.
#[hook]
fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(document) = window.document().and_then(|doc| doc.document_element())
                else {
                    return;
                };
                let scrolled = window.scroll_y().unwrap_or(0.0);
                let track =
                    (document.scroll_height() - document.client_height()).max(1) as f64;
                progress.set((scrolled / track).clamp(0.0, 1.0));
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

    *progress
}

#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailProps) -> Html {
    let t = use_translations();
    let language =
        use_context::<LanguageContext>().map(|ctx| ctx.language).unwrap_or(Language::En);
    let (posts, loading) = use_posts();
    let progress = use_scroll_progress();
    use_scroll_to_top();

    let post = posts.iter().find(|post| post.id == props.id).cloned();

    {
        let post = post.clone();
        use_effect_with((post, language), |(post, language)| {
            if let Some(post) = post {
                seo::apply_post_seo(post, *language);
            }
            || ()
        });
    }

    if loading {
        return html! {
            <div class="min-h-screen pt-32 px-6 bg-white dark:bg-slate-950">
                <div class="container mx-auto max-w-4xl space-y-8">
                    <div class="h-96 rounded-3xl bg-gray-200 dark:bg-slate-800 animate-pulse"></div>
                    <div class="h-6 w-2/3 rounded-full bg-gray-200 dark:bg-slate-800 animate-pulse"></div>
                    <div class="h-6 w-1/2 rounded-full bg-gray-200 dark:bg-slate-800 animate-pulse"></div>
                </div>
            </div>
        };
    }

    // Deep link to a deleted or unknown post: nothing to show.
    let Some(post) = post else {
        return html! {};
    };

    html! {
        <div class="min-h-screen pb-20 bg-white dark:bg-slate-950">
            // Reading progress bar
            <div class="fixed top-0 left-0 w-full h-1.5 bg-gray-100 dark:bg-slate-800 z-50">
                <div
                    class="h-full bg-blue-600 transition-all duration-100"
                    style={format!("width: {:.1}%", progress * 100.0)}
                ></div>
            </div>

            <div class="relative h-[70vh] w-full">
                <div class="absolute inset-0">
                    <img src={post.image.clone()} alt={post.title.clone()} class="w-full h-full object-cover" />
                    <div class="absolute inset-0 bg-black/60 backdrop-blur-[2px]"></div>
                </div>
                <div class="absolute bottom-0 left-0 w-full p-10 md:p-20 z-10">
                    <div class="container mx-auto max-w-4xl">
                        <Link<Route>
                            to={Route::Posts}
                            classes={classes!("inline-flex", "items-center", "gap-2", "text-white/80", "hover:text-white", "mb-10", "transition-colors", "font-semibold", "bg-white/10", "backdrop-blur-md", "px-4", "py-2", "rounded-full", "border", "border-white/20")}
                        >
                            <Icon name={IconName::ArrowLeft} size={20} />
                            { t.blog.back_to_blog }
                        </Link<Route>>
                        <span class="inline-block px-4 py-1.5 bg-blue-600 text-white text-sm font-bold rounded-full uppercase tracking-wider mb-6">
                            { &post.category }
                        </span>
                        <h1 class="text-4xl md:text-7xl font-bold text-white leading-tight mb-8">
                            { &post.title }
                        </h1>
                        <div class="flex flex-wrap items-center gap-6 text-white/80 text-sm">
                            <div class="flex items-center gap-2">
                                <Icon name={IconName::Calendar} size={16} />
                                { &post.date }
                            </div>
                            <div class="flex items-center gap-2">
                                <Icon name={IconName::Clock} size={16} />
                                { &post.read_time }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-6 max-w-3xl mt-20">
                <div class="max-w-none text-gray-700 dark:text-gray-300 leading-relaxed space-y-12">
                    <p class="text-2xl font-medium leading-relaxed text-gray-900 dark:text-gray-100 italic border-l-4 border-blue-600 pl-8 py-2">
                        { &post.excerpt }
                    </p>
                    <div class="space-y-8 text-lg md:text-xl">
                        { for post.content.iter().enumerate().map(|(index, paragraph)| {
                            let class = if index == 0 {
                                "first-letter:text-7xl first-letter:font-bold \
                                 first-letter:text-blue-600 first-letter:mr-3 \
                                 first-letter:float-left"
                            } else {
                                ""
                            };
                            html! { <p class={class}>{ paragraph }</p> }
                        }) }
                    </div>
                </div>

                <div class="mt-20 pt-12 border-t border-gray-100 dark:border-slate-800 flex flex-col md:flex-row justify-between items-center gap-8">
                    <div>
                        <h4 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">
                            { "Enjoyed this article?" }
                        </h4>
                        <p class="text-gray-500">
                            { "Follow along or get in touch for more like it." }
                        </p>
                    </div>
                    <div class="flex gap-4">
                        <a
                            href="https://twitter.com/intent/tweet"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Share on Twitter"
                            class="p-4 bg-gray-50 dark:bg-slate-900 rounded-2xl hover:bg-blue-600 hover:text-white transition-all"
                        >
                            <Icon name={IconName::Twitter} size={24} />
                        </a>
                        <a
                            href="https://linkedin.com/in/mustafaaltas"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Share on LinkedIn"
                            class="p-4 bg-gray-50 dark:bg-slate-900 rounded-2xl hover:bg-blue-600 hover:text-white transition-all"
                        >
                            <Icon name={IconName::Linkedin} size={24} />
                        </a>
                        <a
                            href="#"
                            aria-label="Share"
                            class="p-4 bg-gray-50 dark:bg-slate-900 rounded-2xl hover:bg-blue-600 hover:text-white transition-all"
                        >
                            <Icon name={IconName::Share2} size={24} />
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
