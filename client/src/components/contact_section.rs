//! Contact section: direct channels, the message form, and the footer.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::link::ExternalAwareLink;
use crate::util::content::{CONTACT_CHANNELS, OWNER_NAME, Section};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor() class="contact">
            <h2>"Contact"</h2>
            <p class="contact__intro">
                "Want to work together or have a question? Feel free to reach out to me through any of these channels."
            </p>
            <div class="contact__channels">
                {CONTACT_CHANNELS
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <div class="contact__channel">
                                <span class="contact__channel-kind">{channel.kind}</span>
                                <ExternalAwareLink
                                    link=crate::util::content::Link { label: channel.display, ..channel.link }
                                    class="contact__channel-value"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <ContactForm/>
            <footer class="contact__footer">{format!("© {OWNER_NAME}. All rights reserved.")}</footer>
        </section>
    }
}
