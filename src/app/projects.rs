use leptos::{either::Either, prelude::*};

use crate::content::{
    load_projects, parse_tags, ContentList, ItemId, Placement, Project, ProjectDraft, Validate,
};

#[component]
pub fn Projects() -> impl IntoView {
    let seed = load_projects().unwrap_or_else(|e| {
        log::error!("couldn't load sample projects: {e}");
        Vec::new()
    });
    let projects = RwSignal::new(ContentList::with_items(Placement::Back, seed));
    let (is_adding, set_is_adding) = signal(false);

    let on_delete = move |id: ItemId| {
        projects.update(|list| {
            list.remove(id);
        });
    };

    view! {
        <section id="projects" class="py-10 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-6">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"My Projects"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "A showcase of my recent work and side projects"
                    </p>
                </div>

                <div class="flex justify-center mb-8">
                    <button
                        class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200"
                        on:click=move |_| set_is_adding.set(true)
                    >
                        "+ Add New Project"
                    </button>
                </div>

                <Show when=move || is_adding.get()>
                    <ProjectForm projects on_close=move || set_is_adding.set(false) />
                </Show>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <For
                        each=move || projects.with(|list| list.iter().cloned().collect::<Vec<_>>())
                        key=|project| project.id
                        children=move |project: Project| {
                            view! { <ProjectCard project on_delete /> }
                        }
                    />
                </div>
                <Show when=move || projects.with(ContentList::is_empty)>
                    <p class="text-center text-gray-500 dark:text-gray-400">"No projects yet."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, on_delete: impl Fn(ItemId) + Send + Sync + 'static) -> impl IntoView {
    let id = project.id;
    let image = match project.image {
        Some(src) => Either::Left(view! {
            <img src=src alt=project.title.clone() class="w-full h-full object-cover" />
        }),
        None => Either::Right(view! {
            <div class="flex items-center justify-center h-full">
                <p class="text-gray-500 dark:text-gray-400 text-sm">"No image uploaded"</p>
            </div>
        }),
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300 border border-gray-200 dark:border-gray-700">
            <div class="relative h-48 bg-gray-100 dark:bg-gray-700 overflow-hidden">
                {image}
                <button
                    aria-label="Delete project"
                    class="absolute top-2 right-2 p-1.5 bg-red-500 text-white rounded-full opacity-60 hover:opacity-100 transition-opacity duration-200"
                    on:click=move |_| on_delete(id)
                >
                    "🗑"
                </button>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .stack
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 text-xs bg-blue-100 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300 rounded">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-1 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs text-gray-500 dark:text-gray-400 bg-gray-100 dark:bg-gray-700 px-2 py-1 rounded">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center px-4 py-2 bg-gray-100 dark:bg-gray-700 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors duration-200"
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200"
                                >
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectForm(
    projects: RwSignal<ContentList<Project>>,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let stack = RwSignal::new(String::new());
    let github_url = RwSignal::new(String::new());
    let live_url = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());

    let draft = move || ProjectDraft {
        title: title.get(),
        description: description.get(),
        stack: parse_tags(&stack.get()),
        github_url: github_url.get(),
        live_url: live_url.get(),
        tags: parse_tags(&tags.get()),
    };

    let on_add = move |_| {
        let draft = draft();
        match projects.try_update(|list| list.add(draft)) {
            Some(Ok(id)) => {
                log::debug!("added project {id}");
                on_close();
            }
            Some(Err(e)) => log::debug!("project draft rejected: {e}"),
            None => {}
        }
    };

    let input_class = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700";

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg mb-8 border border-gray-200 dark:border-gray-700">
            <h3 class="text-xl font-semibold mb-4">"Add New Project"</h3>
            <div class="space-y-4">
                <input type="text" placeholder="Project Title" class=input_class bind:value=title />
                <textarea
                    placeholder="Project Description"
                    rows="3"
                    class=input_class
                    bind:value=description
                ></textarea>
                <input
                    type="text"
                    placeholder="Stack (comma separated)"
                    class=input_class
                    bind:value=stack
                />
                <input type="url" placeholder="GitHub URL" class=input_class bind:value=github_url />
                <input type="url" placeholder="Live Demo URL" class=input_class bind:value=live_url />
                <input
                    type="text"
                    placeholder="Tags (comma separated, e.g., #React, #Node)"
                    class=input_class
                    bind:value=tags
                />
            </div>
            <div class="flex justify-end space-x-3 mt-6">
                <button
                    class="px-4 py-2 text-gray-600 dark:text-gray-400 hover:text-gray-800 dark:hover:text-gray-200"
                    on:click=move |_| on_close()
                >
                    "Cancel"
                </button>
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                    disabled=move || !draft().is_complete()
                    on:click=on_add
                >
                    "Add Project"
                </button>
            </div>
        </div>
    }
}
