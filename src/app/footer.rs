use leptos::{either::Either, prelude::*};

use crate::config::{SiteConfig, SECTIONS};

use super::use_theme;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let theme = use_theme();
    let year = config.copyright_year();

    view! {
        <footer class="bg-gray-50 dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center space-x-2 mb-4">
                            <span class="p-2 bg-gradient-to-r from-blue-500 to-teal-500 rounded-lg text-white font-mono">
                                "</>"
                            </span>
                            <span class="text-xl font-bold">{config.owner}</span>
                        </div>
                        <p class="text-gray-600 dark:text-gray-400 mb-4">
                            "A Full Stack Developer passionate about creating scalable web applications with clean code and modern design."
                        </p>
                        <div class="flex space-x-4">
                            {config
                                .social_links()
                                .into_iter()
                                .map(|link| {
                                    let external = link.is_external();
                                    view! {
                                        <a
                                            href=link.href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            aria-label=link.name
                                            class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400"
                                        >
                                            {link.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=config.mail_href()
                                aria-label="Email"
                                class="text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400"
                            >
                                "Email"
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Quick Links"</h3>
                        <div class="grid grid-cols-2 gap-2">
                            {SECTIONS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="text-left text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                                        >
                                            {*name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Settings"</h3>
                        <div class="space-y-3">
                            <button
                                class="flex items-center space-x-2 px-4 py-2 bg-gray-100 dark:bg-gray-800 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
                                on:click=move |_| theme.toggle()
                            >
                                {move || {
                                    if theme.is_dark() {
                                        Either::Left(view! { <span>"☀ Light Mode"</span> })
                                    } else {
                                        Either::Right(view! { <span>"☾ Dark Mode"</span> })
                                    }
                                }}
                            </button>
                            <a
                                href=config.source_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400"
                            >
                                <span>"View Source ↗"</span>
                            </a>
                        </div>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-gray-200 dark:border-gray-700 text-center">
                    <p class="text-gray-600 dark:text-gray-400">
                        {format!(
                            "© {year} {}. Built with Rust, Leptos and Tailwind CSS.",
                            config.owner,
                        )}
                    </p>
                </div>
            </div>
        </footer>
    }
}
