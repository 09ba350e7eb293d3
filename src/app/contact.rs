use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::config::SiteConfig;
use crate::contact::{ContactForm, Delivery, Field, SimulatedDelivery, SubmitStatus};

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let mail_href = config.mail_href();
    let info = vec![
        ("Email", config.email.to_string(), Some(mail_href)),
        (
            "GitHub",
            config.github_label.to_string(),
            Some(config.github_url.to_string()),
        ),
        (
            "LinkedIn",
            "Connect with me".to_string(),
            Some(config.linkedin_url.to_string()),
        ),
        ("Location", "Available for Remote Work".to_string(), None),
    ];

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Ready to work together? Let's discuss your next project or just say hello!"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                            <p class="text-gray-600 dark:text-gray-400 leading-relaxed mb-8">
                                "I'm always open to discussing new opportunities, interesting projects, or just having a chat about web development. Feel free to reach out through any of the channels below."
                            </p>
                        </div>
                        <div class="space-y-4">
                            {info
                                .into_iter()
                                .map(|(label, value, href)| view! { <ContactInfo label value href /> })
                                .collect_view()}
                        </div>
                    </div>
                    <ContactFormView />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(label: &'static str, value: String, href: Option<String>) -> impl IntoView {
    let value = match href {
        Some(href) => {
            let external = href.starts_with("http");
            Either::Left(view! {
                <a
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    class="hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200"
                >
                    {value}
                </a>
            })
        }
        None => Either::Right(view! { <span>{value}</span> }),
    };

    view! {
        <div class="flex items-center p-4 bg-gray-50 dark:bg-gray-800 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors duration-200">
            <div>
                <h4 class="text-sm font-medium text-gray-500 dark:text-gray-400">{label}</h4>
                {value}
            </div>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (send_delay, ack_duration) = (config.send_delay, config.ack_duration);
    let form = RwSignal::new(ContactForm::default());
    let is_sending = move || form.with(|f| f.status() == SubmitStatus::Sending);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                log::debug!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        let delivery = SimulatedDelivery { delay: send_delay };
        spawn_local(async move {
            delivery.deliver(message).await;
            if let Some(ack) = form.try_update(ContactForm::complete_submit) {
                set_timeout(move || form.update(|f| f.dismiss_ack(ack)), ack_duration);
            }
        });
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8 border border-gray-200 dark:border-gray-700">
            <h3 class="text-2xl font-bold mb-6">"Send Message"</h3>

            <Show when=move || form.with(|f| f.status() == SubmitStatus::Sent)>
                <div class="mb-6 p-4 bg-green-100 dark:bg-green-900/30 border border-green-200 dark:border-green-800 rounded-lg flex items-center">
                    <span class="text-green-700 dark:text-green-300">
                        "✓ Message sent successfully! I'll get back to you soon."
                    </span>
                </div>
            </Show>

            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <div class="grid md:grid-cols-2 gap-6">
                    <FormField form field=Field::Name id="name" placeholder="Your Name" />
                    <FormField
                        form
                        field=Field::Email
                        id="email"
                        input_type="email"
                        placeholder="your.email@example.com"
                    />
                </div>
                <FormField form field=Field::Subject id="subject" placeholder="What's this about?" />
                <FormField
                    form
                    field=Field::Message
                    id="message"
                    multiline=true
                    placeholder="Tell me about your project or just say hello!"
                />
                <button
                    type="submit"
                    disabled=is_sending
                    class="w-full flex items-center justify-center px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200"
                >
                    {move || if is_sending() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    id: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields().value(field).to_string());
    let class = "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-colors duration-200";

    let input = if multiline {
        Either::Left(view! {
            <textarea
                id=id
                rows="6"
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=class
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        })
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                {field.to_string()}
                " *"
            </label>
            {input}
            {move || {
                form.with(|f| f.errors().get(field))
                    .map(|e| {
                        view! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{e.to_string()}</p> }
                    })
            }}
        </div>
    }
}
