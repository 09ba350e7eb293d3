use leptos::prelude::*;

static TECH_STACK: [(&str, &[&str]); 5] = [
    (
        "Frontend",
        &["HTML", "CSS", "JavaScript", "TypeScript", "React", "Leptos", "Tailwind CSS"],
    ),
    ("Backend", &["Rust", "Axum", "Node.js", "Express"]),
    ("Database", &["PostgreSQL", "SQL Server"]),
    (
        "Tools",
        &["Git", "GitHub", "Vercel", "Postman", "Visual Studio Code", "Render"],
    ),
    ("Extras", &["WebAssembly", "cargo-leptos"]),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"About Me"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Learn more about my journey as a self-taught developer"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6 text-gray-600 dark:text-gray-400 leading-relaxed">
                        <p>
                            "As a self-taught full stack developer, I've dedicated myself to mastering modern web technologies through hands-on projects and continuous learning. My passion lies in creating scalable, user-friendly applications that solve real-world problems."
                        </p>
                        <p>
                            "I believe in writing clean, maintainable code and staying up-to-date with the latest industry trends and best practices. Every project is an opportunity to learn something new and push the boundaries of what's possible."
                        </p>
                    </div>
                    <div class="space-y-6">
                        <h3 class="text-2xl font-bold">"Tech Stack"</h3>
                        {TECH_STACK
                            .iter()
                            .map(|(category, technologies)| {
                                view! {
                                    <div>
                                        <h4 class="text-sm font-semibold uppercase tracking-wide text-blue-600 dark:text-blue-400 mb-2">
                                            {*category}
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-3 py-1 text-sm bg-gray-100 dark:bg-gray-800 rounded-full">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
