use leptos::prelude::*;

use crate::content::{
    load_posts, parse_tags, BlogPost, ContentList, ItemId, Placement, PostDraft, Validate,
    POST_CATEGORIES,
};
use crate::markdown::render_markdown;

#[component]
pub fn Blog() -> impl IntoView {
    let seed = load_posts().unwrap_or_else(|e| {
        log::error!("couldn't load sample posts: {e}");
        Vec::new()
    });
    let posts = RwSignal::new(ContentList::with_items(Placement::Front, seed));
    let selected = RwSignal::new(None::<ItemId>);
    let (is_adding, set_is_adding) = signal(false);

    let on_delete = move |id: ItemId| {
        posts.update(|list| {
            list.remove(id);
        });
        if selected.get_untracked() == Some(id) {
            selected.set(None);
        }
    };

    let selected_post = move || selected.get().and_then(|id| posts.with(|list| list.get(id).cloned()));

    view! {
        <section id="blog" class="py-20">
            <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                <div class="mb-16 text-center">
                    <h2 class="mb-4 text-3xl font-bold md:text-4xl">"My Blog"</h2>
                    <p class="max-w-2xl mx-auto text-lg text-gray-600 dark:text-gray-400">
                        "Sharing insights, tips, and reflections from my development journey"
                    </p>
                </div>

                <div class="flex justify-center mb-8">
                    <button
                        class="inline-flex items-center px-6 py-3 text-white transition-colors duration-200 bg-blue-600 rounded-lg hover:bg-blue-700"
                        on:click=move |_| set_is_adding.set(true)
                    >
                        "+ Write New Post"
                    </button>
                </div>

                <Show when=move || is_adding.get()>
                    <PostForm posts on_close=move || set_is_adding.set(false) />
                </Show>

                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || posts.with(|list| list.iter().cloned().collect::<Vec<_>>())
                        key=|post| post.id
                        children=move |post: BlogPost| {
                            view! { <PostCard post on_open=move |id| selected.set(Some(id)) on_delete /> }
                        }
                    />
                </div>

                {move || {
                    selected_post()
                        .map(|post| view! { <PostModal post on_close=move || selected.set(None) /> })
                }}
            </div>
        </section>
    }
}

#[component]
fn Tags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tag| {
                    view! {
                        <span class="inline-flex items-center px-2 py-1 text-xs text-gray-700 bg-gray-100 rounded dark:bg-gray-700 dark:text-gray-300">
                            "# "
                            {tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PostCard(
    post: BlogPost,
    on_open: impl Fn(ItemId) + Send + Sync + 'static,
    on_delete: impl Fn(ItemId) + Send + Sync + 'static,
) -> impl IntoView {
    let id = post.id;
    let date = post.display_date();

    view! {
        <article
            class="overflow-hidden transition-all duration-300 bg-white border border-gray-200 shadow-lg cursor-pointer dark:bg-gray-800 rounded-xl hover:shadow-2xl dark:border-gray-700"
            on:click=move |_| on_open(id)
        >
            <div class="p-6">
                <div class="flex items-center justify-between mb-4">
                    <span class="px-3 py-1 text-xs font-medium text-blue-700 bg-blue-100 rounded-full dark:bg-blue-900/30 dark:text-blue-300">
                        {post.category}
                    </span>
                    <button
                        aria-label="Delete post"
                        class="p-1 text-red-500 transition-colors duration-200 rounded hover:bg-red-100 dark:hover:bg-red-900/30"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete(id);
                        }
                    >
                        "🗑"
                    </button>
                </div>
                <h3 class="mb-3 text-xl font-bold leading-tight">{post.title}</h3>
                <p class="mb-4 leading-relaxed text-gray-600 dark:text-gray-400">{post.excerpt}</p>
                <div class="flex items-center mb-4 text-sm text-gray-500 dark:text-gray-400">
                    <span class="mr-4">"📅 " {date}</span>
                    <span>"⏱ " {post.read_time}</span>
                </div>
                <Tags tags=post.tags />
            </div>
        </article>
    }
}

#[component]
fn PostModal(post: BlogPost, on_close: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    let date = post.display_date();
    let body = render_markdown(&post.content);

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50"
            on:click=move |_| on_close()
        >
            <div
                class="bg-white dark:bg-gray-800 rounded-xl max-w-4xl max-h-[90vh] overflow-y-auto p-8"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-6">
                    <span class="px-3 py-1 text-sm font-medium text-blue-700 bg-blue-100 rounded-full dark:bg-blue-900/30 dark:text-blue-300">
                        {post.category}
                    </span>
                    <button
                        aria-label="Close"
                        class="text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                <h1 class="mb-4 text-3xl font-bold">{post.title}</h1>
                <div class="flex items-center mb-6 text-sm text-gray-500 dark:text-gray-400">
                    <span class="mr-4">"📅 " {date}</span>
                    <span>"⏱ " {post.read_time}</span>
                </div>
                <article class="mb-6 prose dark:prose-invert max-w-none">
                    <div inner_html=body></div>
                </article>
                <Tags tags=post.tags />
            </div>
        </div>
    }
}

#[component]
fn PostForm(
    posts: RwSignal<ContentList<BlogPost>>,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let read_time = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());

    let draft = move || PostDraft {
        title: title.get(),
        excerpt: excerpt.get(),
        content: content.get(),
        read_time: read_time.get(),
        tags: parse_tags(&tags.get()),
        category: category.get(),
    };

    let on_publish = move |_| {
        let draft = draft();
        match posts.try_update(|list| list.add(draft)) {
            Some(Ok(id)) => {
                log::debug!("published post {id}");
                on_close();
            }
            Some(Err(e)) => log::debug!("post draft rejected: {e}"),
            None => {}
        }
    };

    let input_class = "w-full px-4 py-2 text-gray-900 bg-white border border-gray-300 rounded-lg dark:border-gray-600 dark:bg-gray-700 dark:text-white";

    view! {
        <div class="p-6 mb-8 bg-white border border-gray-200 shadow-lg dark:bg-gray-800 rounded-xl dark:border-gray-700">
            <h3 class="mb-4 text-xl font-semibold">"Write New Blog Post"</h3>
            <div class="space-y-4">
                <input type="text" placeholder="Blog Post Title" class=input_class bind:value=title />
                <textarea
                    placeholder="Excerpt (brief summary)"
                    rows="3"
                    class=input_class
                    bind:value=excerpt
                ></textarea>
                <textarea
                    placeholder="Full content (Markdown)"
                    rows="8"
                    class=input_class
                    bind:value=content
                ></textarea>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                    <select class=input_class bind:value=category>
                        <option value="">"Select Category"</option>
                        {POST_CATEGORIES
                            .iter()
                            .map(|cat| view! { <option value=*cat>{*cat}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Read time (e.g., 5 min read)"
                        class=input_class
                        bind:value=read_time
                    />
                    <input
                        type="text"
                        placeholder="Tags (comma separated)"
                        class=input_class
                        bind:value=tags
                    />
                </div>
            </div>
            <div class="flex justify-end mt-6 space-x-3">
                <button
                    class="px-4 py-2 text-gray-600 dark:text-gray-400 hover:text-gray-800 dark:hover:text-gray-200"
                    on:click=move |_| on_close()
                >
                    "Cancel"
                </button>
                <button
                    class="px-6 py-2 text-white transition-colors duration-200 bg-blue-600 rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    disabled=move || !draft().is_complete()
                    on:click=on_publish
                >
                    "Publish Post"
                </button>
            </div>
        </div>
    }
}
