//! Anchor that opens off-site targets in a new tab.

use leptos::prelude::*;

use crate::util::content::Link;

#[component]
pub fn ExternalAwareLink(link: Link, #[prop(optional)] class: &'static str) -> impl IntoView {
    let external = link.is_external();
    view! {
        <a
            class=class
            href=link.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {link.label}
        </a>
    }
}
