//! Reusable Yew hooks: post loading with sample fallback, pagination,
//! and scroll-to-top on route changes.

use folio_shared::pagination::{clamp_page, page_count, page_slice};
use folio_shared::BlogPost;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{api, samples};

/// Load the published posts once on mount.
///
/// Returns `(posts, loading)`. While `loading` is true the caller should
/// render a skeleton. When the backend is unreachable or holds no posts
/// yet, the bundled sample set is substituted so the public pages never
/// go blank.
#[hook]
pub fn use_posts() -> (Vec<BlogPost>, bool) {
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let fetched = api::fetch_posts().await;
                if let Err(e) = &fetched {
                    console::error_1(&format!("Failed to fetch posts: {}", e).into());
                }
                posts.set(folio_shared::posts_or(fetched, samples::sample_posts()));
                loading.set(false);
            });
            || ()
        });
    }

    ((*posts).clone(), *loading)
}

/// Paginate arbitrary vectors inside a component.
///
/// # Example
/// ```rust
/// use crate::components::pagination::Pagination;
/// use crate::hooks::{use_pagination, use_posts};
///
/// #[function_component(PostsPage)]
/// fn posts_page() -> Html {
///     let (posts, _loading) = use_posts();
///     let (visible, current_page, total_pages, go_to_page) = use_pagination(posts, 6);
///
///     html! {
///         <>
///             { for visible.iter().map(|post| html! { <div>{ &post.title }</div> }) }
///             <Pagination
///                 current_page={current_page}
///                 total_pages={total_pages}
///                 on_page_change={go_to_page.clone()}
///             />
///         </>
///     }
/// }
/// ```
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = page_count(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let memoized_slice = {
        let current_snapshot = *current_page;
        use_memo((items, current_snapshot, per_page), move |(items, page, per_page)| {
            page_slice(items, *page, *per_page).to_vec()
        })
    };

    let visible_items = (*memoized_slice).clone();
    let visible_page = clamp_page(*current_page, total_pages);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next_page = clamp_page(page, total_pages);
            if next_page != *current_page {
                current_page.set(next_page);
            }
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes. Call inside top-level pages so navigating between listing and
/// detail views never lands mid-scroll.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// Smooth-scroll the window back to the top-left corner.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
