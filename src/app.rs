mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod resume;
mod testimonials;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SiteConfig, FAVICON};

use about::About;
use blog::Blog;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use resume::Resume;
use testimonials::Testimonials;
pub use theme::{provide_theme_context, use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = SiteConfig::default();
    let owner = config.owner;
    provide_context(config);
    let theme = provide_theme_context();

    view! {
        // the theme class lives on <html> so every section picks it up
        <Html {..} class=move || theme.preference().class_name() data-theme=move || theme.preference().to_string() />
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <div class="min-w-full min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300">
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Every section of the portfolio, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Resume />
        <Blog />
        <Testimonials />
        <Contact />
    }
}
