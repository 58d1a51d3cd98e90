use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        icons::{Icon, IconName},
        pagination::Pagination,
        post_card::PostCard,
    },
    hooks::{use_pagination, use_posts, use_scroll_to_top},
    language_context::use_translations,
    router::Route,
};

const POSTS_PER_PAGE: usize = 6;

#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let t = use_translations();
    let (posts, loading) = use_posts();
    let (visible, current_page, total_pages, go_to_page) = use_pagination(posts, POSTS_PER_PAGE);
    use_scroll_to_top();

    // Jumping pages also jumps back to the top of the grid.
    let on_page_change = {
        let go_to_page = go_to_page.clone();
        Callback::from(move |page: usize| {
            go_to_page.emit(page);
            crate::hooks::scroll_window_to_top();
        })
    };

    html! {
        <div class="min-h-screen pt-32 pb-20 bg-gray-50 dark:bg-slate-950">
            <div class="container mx-auto px-6">
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("inline-flex", "items-center", "gap-2", "text-gray-600", "dark:text-gray-300", "hover:text-blue-600", "mb-12", "font-semibold", "transition-colors")}
                >
                    <Icon name={IconName::ArrowLeft} size={20} />
                    { t.blog.back_to_home }
                </Link<Route>>

                <div class="mb-16 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 dark:text-white mb-6">
                        { t.blog.all_posts_title }
                    </h1>
                    <p class="text-gray-600 dark:text-gray-400">{ t.blog.all_posts_subtitle }</p>
                </div>

                {
                    if loading {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                { for (0..POSTS_PER_PAGE).map(|i| html! {
                                    <div key={i} class="h-96 rounded-3xl bg-gray-200 dark:bg-slate-800 animate-pulse"></div>
                                }) }
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    { for visible.iter().map(|post| html! {
                                        <PostCard key={post.id.clone()} post={post.clone()} />
                                    }) }
                                </div>
                                <Pagination
                                    current_page={current_page}
                                    total_pages={total_pages}
                                    on_page_change={on_page_change}
                                />
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
