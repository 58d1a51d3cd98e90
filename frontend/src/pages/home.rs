use folio_shared::BlogPost;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        icons::{Icon, IconName},
        post_card::PostCard,
    },
    hooks::use_posts,
    language_context::use_translations,
    router::Route,
};

// Matches the sticky header height, same constant as the header's own
// anchor handling.
const SECTION_OFFSET: f64 = 80.0;

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
        - SECTION_OFFSET;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (posts, loading) = use_posts();

    html! {
        <>
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <BlogPreviewSection posts={posts} loading={loading} />
            <CoverLetterSection />
            <CvSection />
            <ContactSection />
        </>
    }
}

// Words the hero headline types and erases in a loop.
const HERO_WORDS: [&str; 4] = ["Developer", "Innovator", "Quick Learner", "Problem Solver"];

const TYPE_DELAY_MS: u32 = 150;
const ERASE_DELAY_MS: u32 = 50;
const HOLD_DELAY_MS: u32 = 1500;

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let t = use_translations();
    let word_index = use_state(|| 0usize);
    let visible_chars = use_state(|| 0usize);
    let erasing = use_state(|| false);

    {
        let word_index = word_index.clone();
        let visible_chars = visible_chars.clone();
        let erasing = erasing.clone();
        use_effect_with((*word_index, *visible_chars, *erasing), move |deps| {
            let (index, chars, is_erasing) = *deps;
            let word = HERO_WORDS[index % HERO_WORDS.len()];
            let word_len = word.chars().count();

            let (delay, step): (u32, Box<dyn FnOnce()>) = if is_erasing {
                if chars == 0 {
                    (ERASE_DELAY_MS, Box::new(move || {
                        erasing.set(false);
                        word_index.set(index + 1);
                    }))
                } else {
                    (ERASE_DELAY_MS, Box::new(move || visible_chars.set(chars - 1)))
                }
            } else if chars >= word_len {
                // fully typed, hold before erasing
                (HOLD_DELAY_MS, Box::new(move || erasing.set(true)))
            } else {
                (TYPE_DELAY_MS, Box::new(move || visible_chars.set(chars + 1)))
            };

            let timeout = Timeout::new(delay, step);
            move || drop(timeout)
        });
    }

    let current_word = HERO_WORDS[*word_index % HERO_WORDS.len()];
    let typed: String = current_word.chars().take(*visible_chars).collect();

    let contact_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#contact");
    });
    let blog_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#blog");
    });

    html! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20">
            <div class="absolute inset-0 bg-[linear-gradient(to_right,#80808012_1px,transparent_1px),linear-gradient(to_bottom,#80808012_1px,transparent_1px)] bg-[size:24px_24px]"></div>
            <div class="container mx-auto px-6 relative z-10 text-center">
                <div class="inline-flex items-center gap-2 px-4 py-2 mb-8 rounded-full border border-blue-200 dark:border-blue-800 bg-white/50 dark:bg-slate-900/50 backdrop-blur-md shadow-lg">
                    <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                    <span class="text-xs font-bold text-gray-600 dark:text-gray-300 tracking-wide uppercase">
                        { "Open to new opportunities" }
                    </span>
                </div>
                <h2 class="text-xl md:text-3xl font-light text-gray-600 dark:text-gray-300 mb-4">
                    { t.hero.greeting }
                </h2>
                <h1 class="text-5xl md:text-8xl font-bold text-gray-900 dark:text-white mb-8 leading-tight">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-600 via-purple-500 to-pink-500">
                        { typed }
                    </span>
                    <span class="animate-pulse text-blue-600">{ "|" }</span>
                </h1>
                <div class="flex flex-col sm:flex-row justify-center gap-6">
                    <a
                        href="#contact"
                        onclick={contact_onclick}
                        class="group px-8 py-4 rounded-full bg-blue-600 text-white font-bold text-lg hover:bg-blue-700 hover:shadow-lg transition-all flex items-center justify-center gap-2 transform hover:-translate-y-1"
                    >
                        { t.hero.cta_primary }
                        <Icon name={IconName::ArrowUpRight} size={20} />
                    </a>
                    <a
                        href="#blog"
                        onclick={blog_onclick}
                        class="px-8 py-4 rounded-full bg-white dark:bg-white/5 text-gray-800 dark:text-white font-bold text-lg border border-gray-200 dark:border-white/10 hover:bg-gray-50 dark:hover:bg-white/10 transition-all flex items-center justify-center gap-2"
                    >
                        { t.hero.cta_secondary }
                        <Icon name={IconName::FileText} size={20} />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let t = use_translations();

    html! {
        <section id="about" class="py-32 bg-white dark:bg-slate-900 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col lg:flex-row items-center gap-16">
                    <div class="w-full lg:w-1/2 relative group">
                        <div class="relative rounded-[2rem] overflow-hidden shadow-2xl transition-transform duration-500 group-hover:-translate-y-2 border border-white/20 dark:border-slate-700 bg-gray-100 dark:bg-slate-800">
                            <img
                                src="https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=1000"
                                alt="Workspace"
                                loading="lazy"
                                class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/20 to-transparent opacity-80"></div>
                            <div class="absolute bottom-0 left-0 p-8">
                                <p class="text-white text-2xl font-bold">{ t.about.experience_title }</p>
                            </div>
                        </div>
                    </div>
                    <div class="w-full lg:w-1/2">
                        <div class="inline-block px-3 py-1 mb-4 rounded-full bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-300 text-xs font-bold uppercase tracking-wider">
                            { t.about.title }
                        </div>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6 text-gray-900 dark:text-white leading-tight">
                            { t.about.title }
                            <span class="text-blue-600">{ "." }</span>
                        </h2>
                        <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed mb-8">
                            { t.about.description }
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

// Self-assessment levels out of 100, rendered as bars.
const SKILL_LEVELS: [(&str, u8); 6] = [
    ("React / Next.js", 80),
    ("Quick Learning", 100),
    ("Adaptability", 93),
    ("Problem Solving", 87),
    ("Teamwork", 90),
    ("Motivation", 100),
];

const TECH_STACK: [&str; 10] = [
    "React", "TypeScript", "Next.js", "TailwindCSS", "Node.js", "PostgreSQL", "Git", "Docker",
    "AWS", "Figma",
];

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    let t = use_translations();

    html! {
        <section id="skills" class="py-32 bg-gray-50 dark:bg-slate-950 relative overflow-hidden">
            <div class="container mx-auto px-6 text-center relative z-10">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 text-gray-900 dark:text-white">
                    { t.skills.title }
                </h2>
                <p class="text-gray-600 dark:text-gray-400 mb-16">{ t.skills.subtitle }</p>
                <div class="max-w-2xl mx-auto bg-white/50 dark:bg-slate-900/50 backdrop-blur-xl rounded-[2rem] border border-white/60 dark:border-white/5 shadow-2xl p-10 space-y-6 text-left">
                    { for SKILL_LEVELS.iter().map(|(name, level)| html! {
                        <div>
                            <div class="flex justify-between text-sm font-bold text-gray-700 dark:text-gray-300 mb-2">
                                <span>{ *name }</span>
                                <span>{ format!("{}%", level) }</span>
                            </div>
                            <div class="h-2.5 rounded-full bg-gray-100 dark:bg-slate-800 overflow-hidden">
                                <div
                                    class="h-full rounded-full bg-gradient-to-r from-blue-600 to-purple-500"
                                    style={format!("width: {}%", level)}
                                ></div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="mt-16 flex flex-wrap justify-center gap-4 max-w-4xl mx-auto">
                    { for TECH_STACK.iter().map(|tech| html! {
                        <div class="px-6 py-3 bg-white dark:bg-slate-800 rounded-full shadow-sm border border-gray-100 dark:border-slate-700 text-gray-700 dark:text-gray-300 font-semibold text-sm hover:scale-110 transition-all cursor-default">
                            { *tech }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BlogPreviewProps {
    posts: Vec<BlogPost>,
    loading: bool,
}

#[function_component(BlogPreviewSection)]
fn blog_preview_section(props: &BlogPreviewProps) -> Html {
    let t = use_translations();

    html! {
        <section id="blog" class="py-32 bg-gray-50 dark:bg-slate-950 relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16 gap-4">
                    <div class="max-w-2xl">
                        <div class="inline-block px-3 py-1 mb-4 rounded-full bg-pink-100 dark:bg-pink-900/30 text-pink-600 dark:text-pink-300 text-xs font-bold uppercase tracking-wider">
                            { "Blog" }
                        </div>
                        <h2 class="text-4xl md:text-5xl font-bold mb-4 text-gray-900 dark:text-white">
                            { t.blog.title }
                        </h2>
                        <p class="text-gray-600 dark:text-gray-400">{ t.blog.subtitle }</p>
                    </div>
                    <Link<Route>
                        to={Route::Posts}
                        classes={classes!("hidden", "md:flex", "items-center", "gap-2", "text-blue-600", "font-bold", "hover:gap-3", "transition-all")}
                    >
                        { t.blog.view_all }
                        <Icon name={IconName::ArrowUpRight} size={20} />
                    </Link<Route>>
                </div>
                {
                    if props.loading {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                                { for (0..3).map(|i| html! {
                                    <div key={i} class="h-96 rounded-3xl bg-gray-200 dark:bg-slate-800 animate-pulse"></div>
                                }) }
                            </div>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                                { for props.posts.iter().take(3).map(|post| html! {
                                    <PostCard key={post.id.clone()} post={post.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
                <div class="mt-12 text-center md:hidden">
                    <Link<Route>
                        to={Route::Posts}
                        classes={classes!("inline-flex", "items-center", "gap-2", "text-blue-600", "font-bold")}
                    >
                        { t.blog.view_all }
                        <Icon name={IconName::ArrowUpRight} size={18} />
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(CoverLetterSection)]
fn cover_letter_section() -> Html {
    let t = use_translations();

    html! {
        <section id="cover-letter" class="py-32 bg-white dark:bg-slate-900 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-5xl mx-auto flex flex-col md:flex-row gap-12">
                    <div class="md:w-1/3">
                        <h2 class="text-4xl font-bold mb-6 text-gray-900 dark:text-white">
                            { t.cover_letter.title }
                            <span class="block text-lg font-normal text-gray-500 mt-2">
                                { t.cover_letter.subtitle }
                            </span>
                        </h2>
                    </div>
                    <div class="md:w-2/3">
                        <div class="bg-gray-50 dark:bg-slate-950 p-10 rounded-[2.5rem] shadow-xl border border-gray-100 dark:border-slate-800 relative">
                            <div class="absolute top-10 left-10 text-blue-100 dark:text-blue-900/10">
                                <Icon name={IconName::Quote} size={80} />
                            </div>
                            <div class="space-y-6 relative z-10 text-lg leading-relaxed text-gray-700 dark:text-gray-300 font-medium">
                                { for t.cover_letter.content.iter().map(|paragraph| html! {
                                    <p>{ *paragraph }</p>
                                }) }
                            </div>
                            <div class="mt-12 flex items-center justify-end gap-5">
                                <div class="flex flex-col items-end">
                                    <span class="font-bold text-2xl text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-purple-600">
                                        { "Mustafa Altas" }
                                    </span>
                                    <span class="text-sm text-gray-500 font-semibold tracking-wide uppercase">
                                        { "Software Engineer" }
                                    </span>
                                </div>
                                <div class="w-14 h-14 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full border-2 border-white"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(CvSection)]
fn cv_section() -> Html {
    let t = use_translations();

    html! {
        <section id="cv" class="py-24 bg-gray-50 dark:bg-slate-950">
            <div class="container mx-auto px-6">
                <div class="relative overflow-hidden rounded-[3rem] text-white p-12 md:p-24 text-center shadow-2xl">
                    <div class="absolute inset-0 bg-gradient-to-r from-blue-700 via-indigo-700 to-purple-700 opacity-90"></div>
                    <div class="relative z-10 max-w-3xl mx-auto">
                        <div class="inline-flex items-center justify-center p-5 bg-white/10 backdrop-blur-md rounded-2xl mb-8 border border-white/20">
                            <Icon name={IconName::FileText} size={40} />
                        </div>
                        <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">{ t.cv.title }</h2>
                        <p class="text-blue-50 text-xl mb-10 leading-relaxed opacity-90">{ t.cv.description }</p>
                        <a
                            href="/static/resume.pdf"
                            download="mustafa-altas-resume.pdf"
                            class="bg-white text-blue-700 font-bold px-10 py-5 rounded-full shadow-2xl hover:scale-105 transition-all inline-flex items-center gap-3 mx-auto text-lg"
                        >
                            <Icon name={IconName::Download} size={24} />
                            { t.cv.download }
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactStatus {
    Idle,
    Sending,
    Success,
    Error,
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let t = use_translations();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| ContactStatus::Idle);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = api::ContactRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                message: message.trim().to_string(),
            };
            if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
                return;
            }

            status.set(ContactStatus::Sending);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            spawn_local(async move {
                match api::send_contact(&request).await {
                    Ok(()) => {
                        status.set(ContactStatus::Success);
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        let status = status.clone();
                        Timeout::new(3000, move || status.set(ContactStatus::Idle)).forget();
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to send message: {}", e).into(),
                        );
                        status.set(ContactStatus::Error);
                    },
                }
            });
        })
    };

    let field_class = "w-full px-6 py-4 rounded-2xl bg-gray-50 dark:bg-slate-800 border-none \
                       outline-none focus:ring-2 ring-blue-500";

    html! {
        <section id="contact" class="py-32 bg-white dark:bg-slate-900 relative">
            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-6xl mx-auto bg-white dark:bg-slate-900 rounded-[2.5rem] shadow-2xl overflow-hidden flex flex-col md:flex-row border border-gray-100 dark:border-slate-800">
                    <div class="p-12 md:w-2/5 bg-gradient-to-br from-blue-600 to-indigo-800 text-white flex flex-col justify-between">
                        <h3 class="text-3xl font-bold mb-6">{ t.contact.title }</h3>
                        <div class="space-y-8">
                            <a href="mailto:mustafa.altas@example.com" class="flex items-center gap-5 hover:translate-x-2 transition-transform">
                                <div class="w-14 h-14 bg-white/10 rounded-2xl flex items-center justify-center border border-white/10">
                                    <Icon name={IconName::Mail} size={24} />
                                </div>
                                <span class="font-medium text-lg">{ "mustafa.altas@example.com" }</span>
                            </a>
                            <a href="https://linkedin.com/in/mustafaaltas" target="_blank" rel="noopener noreferrer" class="flex items-center gap-5 hover:translate-x-2 transition-transform">
                                <div class="w-14 h-14 bg-white/10 rounded-2xl flex items-center justify-center border border-white/10">
                                    <Icon name={IconName::Linkedin} size={24} />
                                </div>
                                <span class="font-medium text-lg">{ "linkedin.com/in/mustafaaltas" }</span>
                            </a>
                        </div>
                    </div>
                    <div class="p-12 md:w-3/5 bg-white dark:bg-slate-900">
                        <form class="space-y-6" {onsubmit}>
                            <input
                                name="name"
                                value={(*name).clone()}
                                oninput={on_name}
                                placeholder={t.contact.name_placeholder}
                                class={field_class}
                                required={true}
                            />
                            <input
                                type="email"
                                name="email"
                                value={(*email).clone()}
                                oninput={on_email}
                                placeholder={t.contact.email_placeholder}
                                class={field_class}
                                required={true}
                            />
                            <textarea
                                rows="4"
                                name="message"
                                value={(*message).clone()}
                                oninput={on_message}
                                placeholder={t.contact.message_placeholder}
                                class={classes!(field_class, "resize-none")}
                                required={true}
                            ></textarea>
                            <button
                                type="submit"
                                disabled={*status == ContactStatus::Sending}
                                class="w-full py-5 font-bold text-lg rounded-2xl bg-blue-600 text-white shadow-xl hover:-translate-y-1 transition-all flex items-center justify-center gap-3 disabled:opacity-60"
                            >
                                {
                                    match *status {
                                        ContactStatus::Sending => html! {
                                            <Icon name={IconName::Loader2} size={20} class={classes!("animate-spin")} />
                                        },
                                        ContactStatus::Success => html! { { "✓" } },
                                        _ => html! {
                                            <>
                                                { t.contact.send }
                                                <Icon name={IconName::Send} size={20} />
                                            </>
                                        },
                                    }
                                }
                            </button>
                            {
                                if *status == ContactStatus::Error {
                                    html! {
                                        <p class="text-sm text-red-500 text-center">
                                            { "Something went wrong. Your message was kept, please try again." }
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
