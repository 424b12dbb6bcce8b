//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the sender reports [`SubmitError::Unavailable`] since
//! submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx answers both become a [`SubmitError`]; the
//! form shows one generic failure message for all of them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactRequest;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("contact submission failed: {status}")]
    Rejected { status: u16 },
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Rejected { status }) }
}

/// Delivers one contact submission. Implementations make exactly one attempt.
#[async_trait::async_trait(?Send)]
pub trait ContactSender {
    async fn send(&self, submission: &ContactRequest) -> Result<(), SubmitError>;
}

/// Posts submissions to [`CONTACT_ENDPOINT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpContactSender;

#[async_trait::async_trait(?Send)]
impl ContactSender for HttpContactSender {
    async fn send(&self, submission: &ContactRequest) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
                .json(submission)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            classify_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            Err(SubmitError::Unavailable)
        }
    }
}
