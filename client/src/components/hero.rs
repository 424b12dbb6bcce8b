//! Hero banner with name, tagline, social links, and scroll shortcuts.

use leptos::prelude::*;

use crate::components::link::ExternalAwareLink;
use crate::util::content::{OWNER_NAME, ROLE, ROLE_SUFFIX, SOCIAL_LINKS, Section};
use crate::util::scroll::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__name">{OWNER_NAME}</h1>
            <p class="hero__tagline">
                <span class="hero__role">{ROLE}</span>
                {format!(" | {ROLE_SUFFIX}")}
            </p>
            <div class="hero__links">
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|link| view! { <ExternalAwareLink link=link class="hero__link"/> })
                    .collect_view()}
            </div>
            <button class="hero__cta" on:click=move |_| scroll_to(Section::Projects)>
                "View Projects"
            </button>
            <button
                class="hero__chevron"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to(Section::About)
            >
                "⌄"
            </button>
        </section>
    }
}
