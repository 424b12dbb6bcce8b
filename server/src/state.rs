//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional outbound messenger and the owner name used in the
//! notification footer. Nothing submitted by visitors is stored here.

use std::sync::Arc;

use crate::telegram::MessageSender;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Outbound messenger. `None` if Telegram env vars are not configured.
    pub messenger: Option<Arc<dyn MessageSender>>,
    pub site_owner: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(messenger: Option<Arc<dyn MessageSender>>, site_owner: &str) -> Self {
        Self { messenger, site_owner: Arc::from(site_owner) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Test `AppState` with messaging disabled.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, "Mustafo")
    }

    /// Test `AppState` with a mock messenger.
    #[must_use]
    pub fn test_app_state_with_messenger(messenger: Arc<dyn MessageSender>) -> AppState {
        AppState::new(Some(messenger), "Mustafo")
    }
}
