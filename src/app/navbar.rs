use leptos::{either::Either, prelude::*};

use crate::config::{SiteConfig, SECTIONS};

use super::use_theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (is_open, set_is_open) = signal(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md border-b border-gray-200 dark:border-gray-700">
            <div class="min-w-full mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <a href="#home" class="flex items-center space-x-2">
                        <span class="p-2 bg-gradient-to-r from-blue-500 to-teal-500 rounded-lg text-white font-mono">
                            "</>"
                        </span>
                        <span class="text-xl font-bold">{config.owner}</span>
                    </a>

                    <div class="hidden lg:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200 font-medium"
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="lg:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            aria-label="Toggle menu"
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                        >
                            {move || if is_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || is_open.get()>
                <div class="lg:hidden bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
                    <div class="px-4 py-4 space-y-2">
                        {SECTIONS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="block w-full text-left px-4 py-2 text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-gray-50 dark:hover:bg-gray-800 rounded-lg transition-colors duration-200"
                                        on:click=move |_| set_is_open.set(false)
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Sun while dark, moon while light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            title="Toggle theme"
            aria-label="Toggle theme"
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if theme.is_dark() {
                    Either::Left(view! { <span class="text-yellow-500">"☀"</span> })
                } else {
                    Either::Right(view! { <span class="text-gray-600">"☾"</span> })
                }
            }}
        </button>
    }
}
