use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-slate-950 px-6 pt-20">
            <div class="text-center">
                <p class="text-8xl md:text-9xl font-bold text-blue-600 mb-6">{ "404" }</p>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                    { "Page not found" }
                </h1>
                <p class="text-gray-500 mb-10">
                    { "The page you are looking for does not exist or has moved." }
                </p>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("inline-flex", "items-center", "gap-2", "px-8", "py-4", "bg-blue-600", "text-white", "font-bold", "rounded-2xl", "shadow-lg", "hover:bg-blue-700", "transition-all")}
                >
                    <Icon name={IconName::ArrowLeft} size={20} />
                    { "Back to Home" }
                </Link<Route>>
            </div>
        </div>
    }
}
