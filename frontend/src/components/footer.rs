use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="py-12 px-6 bg-white dark:bg-slate-900 border-t border-gray-100 dark:border-slate-800">
            <div class="container mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    { format!("© {} Mustafa Altas. Tüm hakları saklıdır.", year) }
                </p>

                // Subtle owner entrance, deliberately low contrast.
                <Link<Route>
                    to={Route::Admin}
                    classes={classes!(
                        "text-[10px]",
                        "font-bold",
                        "uppercase",
                        "tracking-widest",
                        "text-gray-300",
                        "dark:text-gray-700",
                        "hover:text-blue-500",
                        "transition-colors"
                    )}
                >
                    { "Yönetici Paneli" }
                </Link<Route>>
            </div>
        </footer>
    }
}
