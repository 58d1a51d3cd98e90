use folio_shared::BlogPost;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::icons::{Icon, IconName};
use crate::language_context::use_translations;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: BlogPost,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let t = use_translations();
    let post = props.post.clone();
    let detail_route = Route::PostDetail {
        id: post.id.clone(),
    };

    html! {
        <article class="group bg-white dark:bg-slate-900 rounded-3xl overflow-hidden border border-gray-100 dark:border-slate-800 shadow-sm hover:shadow-xl transition-all duration-300 flex flex-col">
            <Link<Route> to={detail_route.clone()} classes={classes!("relative", "block", "h-48", "overflow-hidden")}>
                <img
                    src={post.image.clone()}
                    alt={post.title.clone()}
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <span class="absolute top-4 left-4 px-3 py-1 bg-white/90 dark:bg-slate-900/90 text-blue-600 dark:text-blue-400 text-xs font-bold rounded-full">
                    { &post.category }
                </span>
            </Link<Route>>
            <div class="p-6 flex flex-col flex-1">
                <div class="flex items-center gap-4 text-xs text-gray-400 dark:text-gray-500 mb-3">
                    <span class="flex items-center gap-1.5">
                        <Icon name={IconName::Calendar} size={14} />
                        { &post.date }
                    </span>
                    <span class="flex items-center gap-1.5">
                        <Icon name={IconName::Clock} size={14} />
                        { &post.read_time }
                    </span>
                </div>
                <h3 class="text-xl font-bold mb-2 line-clamp-2 group-hover:text-blue-500 transition-colors">
                    <Link<Route> to={detail_route.clone()}>
                        { &post.title }
                    </Link<Route>>
                </h3>
                <p class="text-sm text-gray-500 dark:text-gray-400 line-clamp-3 mb-4 flex-1">
                    { &post.excerpt }
                </p>
                <Link<Route>
                    to={detail_route}
                    classes={classes!("flex", "items-center", "gap-1", "text-sm", "font-bold", "text-blue-500", "hover:gap-2", "transition-all")}
                >
                    { t.blog.read_more }
                    <Icon name={IconName::ArrowUpRight} size={16} />
                </Link<Route>>
            </div>
        </article>
    }
}
