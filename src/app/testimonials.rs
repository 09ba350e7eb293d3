use leptos::prelude::*;

use crate::content::{
    load_testimonials, ContentList, ItemId, Placement, Testimonial, TestimonialDraft, Validate,
};

#[component]
pub fn Testimonials() -> impl IntoView {
    let seed = load_testimonials().unwrap_or_else(|e| {
        log::error!("couldn't load sample testimonials: {e}");
        Vec::new()
    });
    let testimonials = RwSignal::new(ContentList::with_items(Placement::Back, seed));

    let on_delete = move |id: ItemId| {
        testimonials.update(|list| {
            list.remove(id);
        });
    };

    view! {
        <section id="testimonials" class="py-20 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"What People Say"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Feedback from peers and collaborators I've worked with"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    <For
                        each=move || testimonials.with(|list| list.iter().cloned().collect::<Vec<_>>())
                        key=|testimonial| testimonial.id
                        children=move |testimonial: Testimonial| {
                            view! { <TestimonialCard testimonial on_delete /> }
                        }
                    />
                </div>
                <TestimonialForm testimonials />
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    testimonial: Testimonial,
    on_delete: impl Fn(ItemId) + Send + Sync + 'static,
) -> impl IntoView {
    let id = testimonial.id;
    let stars = "★".repeat(testimonial.rating.into());
    let initial = testimonial.initial();
    let byline = testimonial.byline();

    view! {
        <div class="relative bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg border border-gray-200 dark:border-gray-700">
            <div class="flex items-center justify-between mb-4">
                <span class="text-yellow-400" aria-label=format!("{} out of 5", testimonial.rating)>
                    {stars}
                </span>
                <button
                    aria-label="Delete testimonial"
                    class="p-1 text-red-500 rounded hover:bg-red-100 dark:hover:bg-red-900/30"
                    on:click=move |_| on_delete(id)
                >
                    "🗑"
                </button>
            </div>
            <p class="text-gray-600 dark:text-gray-400 mb-6 italic leading-relaxed">
                "\u{201C}" {testimonial.content} "\u{201D}"
            </p>
            <div class="flex items-center">
                <div class="w-12 h-12 bg-gradient-to-r from-blue-500 to-teal-500 rounded-full flex items-center justify-center mr-4">
                    <span class="text-white font-bold text-lg">{initial}</span>
                </div>
                <div>
                    <h4 class="font-semibold">{testimonial.name}</h4>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{byline}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TestimonialForm(testimonials: RwSignal<ContentList<Testimonial>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let rating = RwSignal::new("5".to_string());

    let draft = move || TestimonialDraft {
        name: name.get(),
        role: role.get(),
        company: company.get(),
        content: content.get(),
        rating: rating.get().parse().unwrap_or(0),
    };

    let on_add = move |_| {
        let draft = draft();
        match testimonials.try_update(|list| list.add(draft)) {
            Some(Ok(id)) => {
                log::debug!("added testimonial {id}");
                for field in [name, role, company, content] {
                    field.set(String::new());
                }
                rating.set("5".to_string());
            }
            Some(Err(e)) => log::debug!("testimonial draft rejected: {e}"),
            None => {}
        }
    };

    let input_class = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700";

    view! {
        <div class="max-w-2xl mx-auto bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg border border-gray-200 dark:border-gray-700">
            <h3 class="text-xl font-semibold mb-4">"Leave a Testimonial"</h3>
            <div class="grid md:grid-cols-2 gap-4 mb-4">
                <input type="text" placeholder="Your Name" class=input_class bind:value=name />
                <select class=input_class bind:value=rating>
                    {(1..=5u8)
                        .rev()
                        .map(|n| view! { <option value=n.to_string()>{"★".repeat(n.into())}</option> })
                        .collect_view()}
                </select>
                <input type="text" placeholder="Role" class=input_class bind:value=role />
                <input type="text" placeholder="Company" class=input_class bind:value=company />
            </div>
            <textarea
                placeholder="What was it like working together?"
                rows="3"
                class=input_class
                bind:value=content
            ></textarea>
            <div class="flex justify-end mt-4">
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors duration-200 disabled:opacity-50"
                    disabled=move || !draft().is_complete()
                    on:click=on_add
                >
                    "Add Testimonial"
                </button>
            </div>
        </div>
    }
}
