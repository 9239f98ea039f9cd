//! Contact form
//!
//! Inputs are gated by the browser `required` constraint; the submit handler
//! posts the draft to the form relay and reports the outcome with a toast.

use leptos::*;
use site_core::{ContactField, ContactFormState, ContactSubmitter, HttpFormRelay, SiteConfig};

use crate::browser::GtagAnalytics;
use crate::components::use_toaster;

const INPUT_CLASS: &str = "w-full rounded-xl border-2 border-gray-300 px-4 py-3 text-base focus:ring-2 focus:ring-green-500 focus:border-green-500";
const LABEL_CLASS: &str = "text-[hsl(var(--asphalt-grey))] font-semibold text-base mb-2 block";

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = store_value(expect_context::<SiteConfig>());
    let toaster = use_toaster();
    let form = create_rw_signal(ContactFormState::new());
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let subject = config.with_value(|config| config.submission_subject.clone());
        let payload = match form.try_update(|f| f.begin_submission(&subject)) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                tracing::debug!("Submission not started: {}", e);
                return;
            }
            None => return,
        };

        let config = config.get_value();
        spawn_local(async move {
            let relay = HttpFormRelay::new(config.relay_endpoint.clone());
            let submitter = ContactSubmitter::new(relay, GtagAnalytics, toaster, &config);
            let outcome = submitter.submit(&payload).await;
            form.update(|f| f.complete_submission(outcome));
        });
    };

    let value_of = move |field: ContactField| form.with(|f| f.value(field).to_string());
    let set_value = move |field: ContactField, value: String| form.update(|f| f.update(field, value));

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div>
                <label for=ContactField::Name.id() class=LABEL_CLASS>
                    {ContactField::Name.label()}
                </label>
                <input
                    id=ContactField::Name.id()
                    type="text"
                    required
                    class=INPUT_CLASS
                    placeholder=ContactField::Name.placeholder()
                    on:input=move |ev| set_value(ContactField::Name, event_target_value(&ev))
                    prop:value=move || value_of(ContactField::Name)
                />
            </div>

            <div>
                <label for=ContactField::Phone.id() class=LABEL_CLASS>
                    {ContactField::Phone.label()}
                </label>
                <input
                    id=ContactField::Phone.id()
                    type="tel"
                    required
                    class=INPUT_CLASS
                    placeholder=ContactField::Phone.placeholder()
                    on:input=move |ev| set_value(ContactField::Phone, event_target_value(&ev))
                    prop:value=move || value_of(ContactField::Phone)
                />
            </div>

            <div>
                <label for=ContactField::Message.id() class=LABEL_CLASS>
                    {ContactField::Message.label()}
                </label>
                <textarea
                    id=ContactField::Message.id()
                    required
                    class=format!("{} min-h-[150px]", INPUT_CLASS)
                    placeholder=ContactField::Message.placeholder()
                    on:input=move |ev| set_value(ContactField::Message, event_target_value(&ev))
                    prop:value=move || value_of(ContactField::Message)
                ></textarea>
                <p class="text-sm text-gray-600 mt-2">
                    "This message will go to my phone, and I will get back to you as soon as possible."
                </p>
            </div>

            <button
                type="submit"
                prop:disabled=submitting
                class="w-full bg-green-600 hover:bg-green-700 disabled:opacity-60 disabled:cursor-not-allowed text-white font-semibold py-4 px-6 rounded-lg transition-colors duration-200 text-base"
            >
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
