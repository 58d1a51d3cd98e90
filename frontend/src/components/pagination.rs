use yew::prelude::*;

use crate::components::icons::{Icon, IconName};
use crate::language_context::use_translations;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let t = use_translations();

    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let button_classes = classes!(
        "p-3",
        "rounded-full",
        "bg-white",
        "dark:bg-slate-800",
        "border",
        "border-gray-100",
        "dark:border-slate-700",
        "shadow-sm",
        "text-gray-600",
        "dark:text-gray-300",
        "hover:text-blue-500",
        "hover:shadow-md",
        "disabled:opacity-40",
        "disabled:cursor-not-allowed",
        "transition-all"
    );

    html! {
        <nav class="flex items-center justify-center gap-6 mt-16">
            <button
                type="button"
                class={button_classes.clone()}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label={t.blog.prev_page}
            >
                <Icon name={IconName::ChevronLeft} size={20} />
            </button>
            <span class="text-sm font-bold tracking-widest text-gray-500 dark:text-gray-400">
                { format!("{} {} {} {}", t.blog.page, current_page, t.blog.of, total_pages) }
            </span>
            <button
                type="button"
                class={button_classes}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label={t.blog.next_page}
            >
                <Icon name={IconName::ChevronRight} size={20} />
            </button>
        </nav>
    }
}
