//! Contact form: three inputs, a send button, and the status line.
//!
//! The gate runs synchronously inside the submit handler; only the network
//! call and its resolution are spawned.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState, SubmitStatus, begin_submission};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = begin_submission(&form) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::contact::deliver_submission(&form, &crate::net::api::HttpContactSender, submission).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let inputs = ContactField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    class="contact-input"
                    type=field.input_type()
                    placeholder=field.placeholder()
                    prop:value=move || form.with(|f| f.field(field).to_owned())
                    on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
                />
            }
        })
        .collect_view();

    let status_line = move || {
        let status = form.with(|f| f.status);
        status.message().map(|text| {
            let class = match status {
                SubmitStatus::Success => "contact-status contact-status--success",
                _ => "contact-status contact-status--error",
            };
            view! { <p class=class>{text}</p> }
        })
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h3>"Send me a message"</h3>
            {inputs}
            <button
                class="contact-button"
                type="submit"
                disabled=move || !form.with(ContactFormState::is_ready)
            >
                <Show
                    when=move || form.with(|f| f.submitting)
                    fallback=|| view! { <span>"Send Message"</span> }
                >
                    <span class="contact-spinner" aria-label="Sending"></span>
                </Show>
            </button>
            {status_line}
        </form>
    }
}
