//! Contact route: the browser-facing proxy in front of the messaging API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::services::contact::{self, ContactError, ContactRequest};
use crate::state::AppState;

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::SubmissionFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/contact` — forward one visitor message. `204` on delivery.
pub async fn submit_contact(State(state): State<AppState>, Json(request): Json<ContactRequest>) -> StatusCode {
    let Some(messenger) = &state.messenger else {
        tracing::warn!("contact submission rejected: messaging not configured");
        return StatusCode::SERVICE_UNAVAILABLE;
    };

    match contact::forward_contact(messenger.as_ref(), &state.site_owner, &request).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => contact_error_to_status(&e),
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
