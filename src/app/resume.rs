use leptos::prelude::*;

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    location: &'static str,
    highlights: &'static [&'static str],
    technologies: &'static [&'static str],
}

static EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "Full Stack Developer",
        company: "Blogging Platform",
        period: "2025",
        location: "Personal Project",
        highlights: &[
            "Built a CRUD blog app using React, Node.js, and PostgreSQL",
            "Implemented user authentication and role-based permissions",
            "Deployed via Vercel with custom API routes",
            "Integrated rich text editor and comment system",
        ],
        technologies: &["React", "Node.js", "PostgreSQL", "Express", "JWT"],
    },
    Experience {
        title: "Full Stack Developer",
        company: "E-Commerce Platform",
        period: "2024 - 2025",
        location: "Personal Project",
        highlights: &[
            "Developed a complete e-commerce solution with payment processing",
            "Implemented inventory management and order tracking",
            "Built responsive UI with modern design principles",
            "Integrated Stripe for secure payment processing",
        ],
        technologies: &["Next.js", "Tailwind CSS", "Stripe", "Prisma", "PostgreSQL"],
    },
    Experience {
        title: "Project-Based Learning",
        company: "Self-Directed Education",
        period: "Ongoing",
        location: "Remote",
        highlights: &[
            "Completed over 10 mini-projects focusing on clean code and REST APIs",
            "Picked up Rust and built this site with Leptos",
            "Practiced Test-Driven Development and code optimization",
            "Built responsive web applications with focus on user experience",
        ],
        technologies: &["JavaScript", "Rust", "React", "Node.js", "SQL", "Git"],
    },
];

static SKILLS: [(&str, &[&str]); 4] = [
    (
        "Frontend",
        &["JavaScript", "TypeScript", "React", "Leptos", "Tailwind CSS", "HTML5", "CSS3"],
    ),
    (
        "Backend",
        &["Rust", "Node.js", "Express.js", "REST APIs", "Authentication", "JWT"],
    ),
    ("Database", &["PostgreSQL", "SQL Server", "Database Design"]),
    (
        "Tools & Others",
        &["Git", "GitHub", "Vercel", "Postman", "VS Code", "Responsive Design"],
    ),
];

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id="resume" class="py-20 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Resume & Experience"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "My journey through self-directed learning and project development"
                    </p>
                </div>
                <div class="grid lg:grid-cols-3 gap-12">
                    <div class="lg:col-span-2">
                        <h3 class="text-2xl font-bold mb-8">"Experience"</h3>
                        <div class="space-y-8">
                            {EXPERIENCES.iter().map(|exp| view! { <ExperienceEntry exp /> }).collect_view()}
                        </div>
                    </div>
                    <Skills />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceEntry(exp: &'static Experience) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg border border-gray-200 dark:border-gray-700">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                <div>
                    <h4 class="text-xl font-bold">{exp.title}</h4>
                    <p class="text-blue-600 dark:text-blue-400 font-medium">{exp.company}</p>
                </div>
                <div class="shrink-0 text-sm text-gray-500 dark:text-gray-400 md:text-right">
                    <div>"📅 " {exp.period}</div>
                    <div>"📍 " {exp.location}</div>
                </div>
            </div>
            <ul class="list-disc list-inside space-y-1 mb-4 text-gray-600 dark:text-gray-400">
                {exp.highlights.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">
                {exp
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 text-xs bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300 rounded-full">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-8">"Skills"</h3>
            <div class="space-y-6">
                {SKILLS
                    .iter()
                    .map(|(category, items)| {
                        view! {
                            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg border border-gray-200 dark:border-gray-700">
                                <h4 class="font-semibold mb-3">{*category}</h4>
                                <div class="space-y-2">
                                    {items
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="flex items-center text-sm text-gray-600 dark:text-gray-400">
                                                    <span class="w-2 h-2 bg-teal-500 rounded-full mr-2"></span>
                                                    {*skill}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-8">
                <a
                    href="#contact"
                    class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200"
                >
                    "Download Resume"
                </a>
            </div>
        </div>
    }
}
