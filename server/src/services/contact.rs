//! Contact submission forwarding.
//!
//! Renders a visitor's details into the fixed notification template and hands
//! it to the configured [`MessageSender`] exactly once. No retry.

use crate::telegram::{MessageSender, TelegramError};

/// Visitor details posted by the contact form. Values arrive verbatim.
/// Shared with the browser crate so both ends agree on the wire shape.
pub use client::net::types::ContactRequest;

pub const DEFAULT_SITE_OWNER: &str = "Mustafo";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("submission failed: {0}")]
    SubmissionFailed(#[from] TelegramError),
}

/// Resolve the owner name shown in the message footer.
#[must_use]
pub fn site_owner_or_default(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SITE_OWNER)
        .to_owned()
}

/// Read `SITE_OWNER_NAME`, falling back to [`DEFAULT_SITE_OWNER`].
#[must_use]
pub fn site_owner_from_env() -> String {
    site_owner_or_default(std::env::var("SITE_OWNER_NAME").ok().as_deref())
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn render_message(request: &ContactRequest, owner: &str) -> String {
    format!(
        "New Message from Portfolio Website\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         \n\
         Sent from {}'s Portfolio",
        escape_html(&request.name),
        escape_html(&request.contact_detail),
        escape_html(&request.phone),
        escape_html(owner),
    )
}

/// Render and send one contact message.
///
/// # Errors
///
/// Returns [`ContactError::SubmissionFailed`] for any transport failure or
/// non-2xx answer from the messaging endpoint.
pub async fn forward_contact(
    sender: &dyn MessageSender,
    owner: &str,
    request: &ContactRequest,
) -> Result<(), ContactError> {
    let text = render_message(request, owner);
    match sender.send_text(&text).await {
        Ok(()) => {
            tracing::info!(name_len = request.name.len(), "contact message forwarded");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact message delivery failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
