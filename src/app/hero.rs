use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let mail_href = config.mail_href();

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-20 bg-gradient-to-br from-blue-50 to-teal-50 dark:from-gray-900 dark:to-gray-800"
        >
            <div class="max-w-4xl mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-blue-600 to-teal-500 bg-clip-text text-transparent">
                        {config.first_name}
                    </span>
                </h1>
                <h2 class="text-2xl md:text-3xl font-semibold text-gray-700 dark:text-gray-300 mb-6">
                    {config.role}
                </h2>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto mb-10 leading-relaxed">
                    {config.tagline}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-10">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200"
                    >
                        "View Projects →"
                    </a>
                    <a
                        href="#blog"
                        class="px-8 py-3 border border-blue-600 text-blue-600 dark:text-blue-400 rounded-lg hover:bg-blue-50 dark:hover:bg-gray-800 transition-colors duration-200"
                    >
                        "Read My Blog"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors duration-200"
                    >
                        "Contact Me"
                    </a>
                </div>
                <div class="flex justify-center gap-6 text-2xl">
                    <a
                        href=config.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                        class="hover:text-blue-600"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a href=mail_href aria-label="Email" class="hover:text-blue-600">
                        "✉"
                    </a>
                </div>
            </div>
        </section>
    }
}
