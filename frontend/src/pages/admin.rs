//! Password-gated management console: list/delete posts, author a post
//! manually, or draft one from keywords through the AI proxy.
//!
//! The console is English-only and replaces the public site chrome
//! entirely (see the router's `AppLayout`).

use folio_shared::content::{estimate_read_time, join_paragraphs, split_paragraphs, stock_image_url};
use folio_shared::keywords::{KeyPress, KeywordEditor, MIN_KEYWORDS};
use folio_shared::{BlogPost, NewBlogPost};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::icons::{Icon, IconName},
    router::Route,
};

/// Proof of a successful passphrase check. Held in component state only,
/// so a reload locks the console again; never a global.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    fn token(&self) -> &str {
        &self.token
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// Randomized cache buster so a repeated lookup for the same search term
// fetches a fresh stock photo.
fn random_cache_buster() -> u32 {
    (js_sys::Math::random() * 1_000_000_000.0) as u32
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_state(|| Option::<AdminSession>::None);

    let on_login = {
        let session = session.clone();
        Callback::from(move |unlocked: AdminSession| session.set(Some(unlocked)))
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.set(None))
    };

    match (*session).clone() {
        Some(active) => html! { <ConsoleView session={active} on_logout={on_logout} /> },
        None => html! { <LoginView on_login={on_login} /> },
    }
}

#[derive(Properties, PartialEq)]
struct LoginProps {
    on_login: Callback<AdminSession>,
}

#[function_component(LoginView)]
fn login_view(props: &LoginProps) -> Html {
    let passphrase = use_state(String::new);
    let checking = use_state(|| false);

    let oninput = {
        let passphrase = passphrase.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            passphrase.set(input.value());
        })
    };

    let onsubmit = {
        let passphrase = passphrase.clone();
        let checking = checking.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *checking {
                return;
            }

            let attempt = (*passphrase).clone();
            let checking = checking.clone();
            let on_login = on_login.clone();
            checking.set(true);
            spawn_local(async move {
                match api::login(&attempt).await {
                    Ok(Some(token)) => on_login.emit(AdminSession {
                        token,
                    }),
                    Ok(None) => alert("Invalid passphrase!"),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Login failed: {}", e).into());
                        alert("Login failed. Is the backend running?");
                    },
                }
                checking.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-slate-950 p-6">
            <div class="w-full max-w-md bg-white dark:bg-slate-900 p-10 rounded-[2.5rem] shadow-2xl border border-gray-100 dark:border-slate-800 text-center">
                <div class="w-20 h-20 bg-blue-100 dark:bg-blue-900/30 rounded-3xl flex items-center justify-center mx-auto mb-8 text-blue-600 dark:text-blue-400">
                    <Icon name={IconName::Lock} size={40} />
                </div>
                <h1 class="text-3xl font-bold mb-2 text-gray-900 dark:text-white">{ "Admin Login" }</h1>
                <p class="text-gray-500 mb-8">{ "Enter the master passphrase to continue." }</p>
                <form {onsubmit} class="space-y-4">
                    <input
                        type="password"
                        value={(*passphrase).clone()}
                        {oninput}
                        placeholder="Passphrase"
                        autofocus={true}
                        class="w-full px-6 py-4 rounded-2xl bg-gray-50 dark:bg-slate-800 border-none outline-none focus:ring-2 ring-blue-500 text-center text-lg"
                    />
                    <button
                        type="submit"
                        disabled={*checking}
                        class="w-full py-4 bg-blue-600 text-white font-bold rounded-2xl shadow-lg hover:bg-blue-700 transition-all disabled:opacity-60"
                    >
                        { if *checking { "Checking..." } else { "Login" } }
                    </button>
                    <Link<Route>
                        to={Route::Home}
                        classes={classes!("block", "text-gray-500", "hover:text-gray-700", "dark:hover:text-gray-300", "text-sm", "font-medium")}
                    >
                        { "Back to Site" }
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    Compose,
    Generate,
}

/// Manual-authoring form fields, kept as raw strings until publish.
#[derive(Debug, Clone, PartialEq)]
struct PostForm {
    title: String,
    category: String,
    image: String,
    excerpt: String,
    raw_content: String,
    read_time: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            image: String::new(),
            excerpt: String::new(),
            raw_content: String::new(),
            read_time: folio_shared::content::DEFAULT_READ_TIME.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ConsoleProps {
    session: AdminSession,
    on_logout: Callback<()>,
}

#[function_component(ConsoleView)]
fn console_view(props: &ConsoleProps) -> Html {
    let active_tab = use_state(|| Tab::List);
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    // Bumped after every mutation; the list effect refetches on change.
    let refresh = use_state(|| 0u32);
    let form = use_state(PostForm::default);
    // Search term behind the current AI-derived cover, for "new image".
    let image_term = use_state(|| Option::<String>::None);
    let editor = use_state(KeywordEditor::new);
    let publishing = use_state(|| false);
    let generating = use_state(|| false);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with(*refresh, move |_| {
            loading.set(true);
            spawn_local(async move {
                match api::fetch_posts().await {
                    Ok(fetched) => posts.set(fetched),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch posts: {}", e).into(),
                        );
                        posts.set(Vec::new());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let token = props.session.token().to_string();
        let refresh = refresh.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this post permanently?") {
                return;
            }
            let token = token.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api::delete_post(&token, &id).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to delete post: {}", e).into(),
                        );
                        alert("Failed to delete the post.");
                    },
                }
            });
        })
    };

    let on_publish = {
        let token = props.session.token().to_string();
        let form = form.clone();
        let image_term = image_term.clone();
        let active_tab = active_tab.clone();
        let refresh = refresh.clone();
        let publishing = publishing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *publishing {
                return;
            }

            let current = (*form).clone();
            // The date is stamped server-side at publish time.
            let post = NewBlogPost {
                title: current.title,
                excerpt: current.excerpt,
                category: current.category,
                image: current.image,
                read_time: current.read_time,
                date: String::new(),
                content: split_paragraphs(&current.raw_content),
            };

            let token = token.clone();
            let form = form.clone();
            let image_term = image_term.clone();
            let active_tab = active_tab.clone();
            let refresh = refresh.clone();
            let publishing = publishing.clone();
            publishing.set(true);
            spawn_local(async move {
                match api::create_post(&token, &post).await {
                    Ok(_id) => {
                        alert("Successfully published!");
                        form.set(PostForm::default());
                        image_term.set(None);
                        active_tab.set(Tab::List);
                        refresh.set(*refresh + 1);
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to publish post: {}", e).into(),
                        );
                        // Keep the form populated for a retry.
                        alert("An error occurred during publishing.");
                    },
                }
                publishing.set(false);
            });
        })
    };

    let on_draft_ready = {
        let form = form.clone();
        let image_term = image_term.clone();
        let active_tab = active_tab.clone();
        Callback::from(move |draft: folio_shared::GeneratedArticle| {
            form.set(PostForm {
                title: draft.title,
                category: draft.category,
                image: stock_image_url(&draft.image_search_term, random_cache_buster()),
                excerpt: draft.excerpt,
                raw_content: join_paragraphs(&draft.content),
                read_time: estimate_read_time(&draft.content),
            });
            image_term.set(Some(draft.image_search_term));
            active_tab.set(Tab::Compose);
        })
    };

    let on_new_image = {
        let form = form.clone();
        let image_term = image_term.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(term) = (*image_term).clone() {
                let mut current = (*form).clone();
                current.image = stock_image_url(&term, random_cache_buster());
                form.set(current);
            }
        })
    };

    let on_logout = {
        let token = props.session.token().to_string();
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            let token = token.clone();
            // Best effort: the local session is dropped either way.
            spawn_local(async move {
                if let Err(e) = api::logout(&token).await {
                    web_sys::console::warn_1(&format!("Logout call failed: {}", e).into());
                }
            });
            on_logout.emit(());
        })
    };

    let tab_button = |tab: Tab, icon: IconName, label: &'static str| {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let onclick = Callback::from(move |_| active_tab.set(tab));
        html! {
            <button
                type="button"
                {onclick}
                class={classes!(
                    "w-full", "flex", "items-center", "gap-3", "px-4", "py-3",
                    "rounded-xl", "transition-all",
                    if is_active {
                        "bg-blue-50 dark:bg-blue-900/20 text-blue-600 font-bold"
                    } else {
                        "text-gray-500 hover:bg-gray-50 dark:hover:bg-slate-800"
                    }
                )}
            >
                <Icon name={icon} size={20} />
                { label }
            </button>
        }
    };

    let (heading, subheading) = match *active_tab {
        Tab::List => ("Manage Blog Posts", "Everything currently published, newest first."),
        Tab::Compose => ("Create New Post", "Review every field before publishing."),
        Tab::Generate => ("Draft with AI", "Give at least three keywords to start a draft."),
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-slate-950 flex flex-col md:flex-row">
            // Sidebar
            <div class="w-full md:w-64 bg-white dark:bg-slate-900 border-r border-gray-100 dark:border-slate-800 p-6 flex flex-col justify-between">
                <div>
                    <div class="flex items-center gap-3 mb-10 px-2">
                        <div class="w-10 h-10 bg-blue-600 rounded-xl flex items-center justify-center text-white">
                            <Icon name={IconName::LayoutDashboard} size={24} />
                        </div>
                        <span class="font-bold text-xl text-gray-900 dark:text-white">{ "Admin Panel" }</span>
                    </div>
                    <nav class="space-y-2">
                        { tab_button(Tab::List, IconName::FileText, "My Posts") }
                        { tab_button(Tab::Compose, IconName::Plus, "Add New") }
                        { tab_button(Tab::Generate, IconName::Sparkles, "AI Draft") }
                    </nav>
                </div>
                <div class="space-y-2 pt-10">
                    <Link<Route>
                        to={Route::Home}
                        classes={classes!("w-full", "flex", "items-center", "gap-3", "px-4", "py-3", "rounded-xl", "text-gray-500", "hover:bg-gray-50", "dark:hover:bg-slate-800", "transition-all")}
                    >
                        <Icon name={IconName::ArrowLeft} size={20} />
                        { "View Site" }
                    </Link<Route>>
                    <button
                        type="button"
                        onclick={on_logout}
                        class="w-full flex items-center gap-3 px-4 py-3 rounded-xl text-red-500 hover:bg-red-50 dark:hover:bg-red-900/10 transition-all"
                    >
                        <Icon name={IconName::LogOut} size={20} />
                        { "Logout" }
                    </button>
                </div>
            </div>

            // Content area
            <div class="flex-1 p-8 md:p-12 overflow-y-auto text-gray-900 dark:text-gray-100">
                <header class="mb-12">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white">{ heading }</h2>
                    <p class="text-gray-500">{ subheading }</p>
                </header>
                {
                    match *active_tab {
                        Tab::List => html! {
                            <PostList posts={(*posts).clone()} loading={*loading} on_delete={on_delete} />
                        },
                        Tab::Compose => html! {
                            <ComposeForm
                                form={form.clone()}
                                publishing={*publishing}
                                can_refresh_image={image_term.is_some()}
                                on_new_image={on_new_image}
                                on_publish={on_publish}
                            />
                        },
                        Tab::Generate => html! {
                            <GeneratePanel
                                token={props.session.token().to_string()}
                                editor={editor.clone()}
                                generating={generating.clone()}
                                on_draft_ready={on_draft_ready}
                            />
                        },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PostListProps {
    posts: Vec<BlogPost>,
    loading: bool,
    on_delete: Callback<String>,
}

#[function_component(PostList)]
fn post_list(props: &PostListProps) -> Html {
    if props.loading {
        return html! {
            <div class="flex items-center justify-center py-20 text-blue-600">
                <Icon name={IconName::Loader2} size={40} class={classes!("animate-spin")} />
            </div>
        };
    }

    if props.posts.is_empty() {
        return html! {
            <div class="bg-white dark:bg-slate-900 p-12 rounded-[2rem] text-center border-2 border-dashed border-gray-100 dark:border-slate-800">
                <p class="text-gray-500">{ "No blog posts found." }</p>
            </div>
        };
    }

    html! {
        <div class="grid gap-6">
            { for props.posts.iter().map(|post| {
                let id = post.id.clone();
                let on_delete = props.on_delete.clone();
                let onclick = Callback::from(move |_| on_delete.emit(id.clone()));
                html! {
                    <div key={post.id.clone()} class="bg-white dark:bg-slate-900 p-6 rounded-3xl border border-gray-100 dark:border-slate-800 flex items-center justify-between hover:shadow-xl transition-all">
                        <div class="flex items-center gap-6">
                            <img src={post.image.clone()} alt={post.title.clone()} class="w-20 h-20 rounded-2xl object-cover" />
                            <div>
                                <h4 class="font-bold text-lg">{ &post.title }</h4>
                                <div class="flex gap-3 text-xs text-gray-500 mt-1">
                                    <span>{ &post.category }</span>
                                    <span>{ "•" }</span>
                                    <span>{ &post.date }</span>
                                </div>
                            </div>
                        </div>
                        <button
                            type="button"
                            {onclick}
                            aria-label="Delete post"
                            class="p-3 text-gray-400 hover:text-red-500 hover:bg-red-50 dark:hover:bg-red-900/20 rounded-xl transition-all"
                        >
                            <Icon name={IconName::Trash2} size={20} />
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ComposeFormProps {
    form: UseStateHandle<PostForm>,
    publishing: bool,
    can_refresh_image: bool,
    on_new_image: Callback<MouseEvent>,
    on_publish: Callback<SubmitEvent>,
}

#[function_component(ComposeForm)]
fn compose_form(props: &ComposeFormProps) -> Html {
    let form = props.form.clone();

    let edit_input = |apply: fn(&mut PostForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*form).clone();
            apply(&mut current, input.value());
            form.set(current);
        })
    };
    let edit_textarea = |apply: fn(&mut PostForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut current = (*form).clone();
            apply(&mut current, area.value());
            form.set(current);
        })
    };

    let field_class = "w-full px-6 py-4 rounded-2xl bg-gray-50 dark:bg-slate-800 border-none \
                       outline-none focus:ring-2 ring-blue-500";
    let label_class = "text-sm font-bold text-gray-700 dark:text-gray-300 ml-1";

    html! {
        <div class="max-w-4xl bg-white dark:bg-slate-900 p-8 md:p-12 rounded-[2.5rem] border border-gray-100 dark:border-slate-800 shadow-xl">
            <form onsubmit={props.on_publish.clone()} class="space-y-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="space-y-2">
                        <label class={label_class}>{ "Title" }</label>
                        <input
                            required={true}
                            value={props.form.title.clone()}
                            oninput={edit_input(|form, value| form.title = value)}
                            class={field_class}
                        />
                    </div>
                    <div class="space-y-2">
                        <label class={label_class}>{ "Category" }</label>
                        <input
                            required={true}
                            value={props.form.category.clone()}
                            oninput={edit_input(|form, value| form.category = value)}
                            placeholder="e.g., Frontend"
                            class={field_class}
                        />
                    </div>
                </div>

                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <label class={label_class}>{ "Cover Image URL" }</label>
                        {
                            if props.can_refresh_image {
                                html! {
                                    <button
                                        type="button"
                                        onclick={props.on_new_image.clone()}
                                        class="flex items-center gap-2 text-sm font-bold text-blue-600 hover:text-blue-700 transition-colors"
                                    >
                                        <Icon name={IconName::RefreshCw} size={16} />
                                        { "New image" }
                                    </button>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <input
                        value={props.form.image.clone()}
                        oninput={edit_input(|form, value| form.image = value)}
                        placeholder="Blank uses a default cover"
                        class={field_class}
                    />
                </div>

                <div class="space-y-2">
                    <label class={label_class}>{ "Short Excerpt" }</label>
                    <textarea
                        required={true}
                        value={props.form.excerpt.clone()}
                        oninput={edit_textarea(|form, value| form.excerpt = value)}
                        rows="2"
                        class={classes!(field_class, "resize-none")}
                    ></textarea>
                </div>

                <div class="space-y-2">
                    <label class={label_class}>{ "Content (one paragraph per line)" }</label>
                    <textarea
                        required={true}
                        value={props.form.raw_content.clone()}
                        oninput={edit_textarea(|form, value| form.raw_content = value)}
                        rows="10"
                        class={field_class}
                    ></textarea>
                </div>

                <div class="space-y-2 md:w-1/2">
                    <label class={label_class}>{ "Read Time" }</label>
                    <input
                        value={props.form.read_time.clone()}
                        oninput={edit_input(|form, value| form.read_time = value)}
                        class={field_class}
                    />
                </div>

                <button
                    type="submit"
                    disabled={props.publishing}
                    class="w-full py-5 bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-bold rounded-2xl shadow-lg hover:shadow-blue-500/30 transition-all flex items-center justify-center gap-3 disabled:opacity-50"
                >
                    {
                        if props.publishing {
                            html! { <Icon name={IconName::Loader2} size={24} class={classes!("animate-spin")} /> }
                        } else {
                            html! { <Icon name={IconName::Send} size={24} /> }
                        }
                    }
                    { "Publish Article" }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GeneratePanelProps {
    token: String,
    editor: UseStateHandle<KeywordEditor>,
    generating: UseStateHandle<bool>,
    on_draft_ready: Callback<folio_shared::GeneratedArticle>,
}

#[function_component(GeneratePanel)]
fn generate_panel(props: &GeneratePanelProps) -> Html {
    let editor = props.editor.clone();
    let generating = props.generating.clone();

    let oninput = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*editor).clone();
            current.set_pending(input.value());
            editor.set(current);
        })
    };

    let onkeydown = {
        let editor = editor.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = KeyPress::from_key(&e.key());
            if matches!(key, KeyPress::Enter | KeyPress::Comma) {
                // keep the comma out of the input and the form unsubmitted
                e.prevent_default();
            }
            if matches!(key, KeyPress::Other) {
                return;
            }
            let mut current = (*editor).clone();
            current.handle_key(key);
            editor.set(current);
        })
    };

    let remove_chip = |index: usize| {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = (*editor).clone();
            current.remove_at(index);
            editor.set(current);
        })
    };

    let on_generate = {
        let editor = editor.clone();
        let generating = generating.clone();
        let token = props.token.clone();
        let on_draft_ready = props.on_draft_ready.clone();
        Callback::from(move |_: MouseEvent| {
            if !editor.can_generate() || *generating {
                return;
            }

            let keywords = editor.keywords().to_vec();
            let token = token.clone();
            let generating = generating.clone();
            let on_draft_ready = on_draft_ready.clone();
            generating.set(true);
            spawn_local(async move {
                match api::generate_article(&token, &keywords).await {
                    Ok(draft) => on_draft_ready.emit(draft),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Generation failed: {}", e).into(),
                        );
                        alert("Article generation failed. Please try again.");
                    },
                }
                generating.set(false);
            });
        })
    };

    let ready = editor.can_generate();

    html! {
        <div class="max-w-4xl bg-white dark:bg-slate-900 p-8 md:p-12 rounded-[2.5rem] border border-gray-100 dark:border-slate-800 shadow-xl space-y-8">
            <div class="space-y-2">
                <label class="text-sm font-bold text-gray-700 dark:text-gray-300 ml-1">
                    { format!("Keywords (at least {})", MIN_KEYWORDS) }
                </label>
                <div class="flex flex-wrap items-center gap-2 px-4 py-3 rounded-2xl bg-gray-50 dark:bg-slate-800 focus-within:ring-2 ring-blue-500">
                    { for editor.keywords().iter().enumerate().map(|(index, keyword)| html! {
                        <span
                            key={keyword.clone()}
                            class="flex items-center gap-1.5 px-3 py-1.5 bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 text-sm font-bold rounded-full"
                        >
                            { keyword }
                            <button
                                type="button"
                                onclick={remove_chip(index)}
                                aria-label={format!("Remove {}", keyword)}
                                class="hover:text-blue-900 dark:hover:text-blue-100"
                            >
                                <Icon name={IconName::X} size={14} />
                            </button>
                        </span>
                    }) }
                    <input
                        value={editor.pending().to_string()}
                        {oninput}
                        {onkeydown}
                        placeholder={
                            if editor.keywords().is_empty() {
                                "Type a keyword, press Enter or comma"
                            } else {
                                ""
                            }
                        }
                        class="flex-1 min-w-[10rem] bg-transparent border-none outline-none py-1.5"
                    />
                </div>
                <p class="text-xs text-gray-400 ml-1">
                    { "Backspace on an empty input removes the last keyword." }
                </p>
            </div>

            <button
                type="button"
                onclick={on_generate}
                disabled={!ready || *generating}
                class="w-full py-5 bg-gradient-to-r from-purple-600 to-blue-600 text-white font-bold rounded-2xl shadow-lg hover:shadow-purple-500/30 transition-all flex items-center justify-center gap-3 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {
                    if *generating {
                        html! { <Icon name={IconName::Loader2} size={24} class={classes!("animate-spin")} /> }
                    } else {
                        html! { <Icon name={IconName::Sparkles} size={24} /> }
                    }
                }
                { if *generating { "Drafting..." } else { "Generate Draft" } }
            </button>

            <p class="text-sm text-gray-500">
                { "The draft opens in the manual form for review. Nothing is published \
                   until you submit it yourself." }
            </p>
        </div>
    }
}
