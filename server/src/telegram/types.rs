//! Telegram Bot API types — request body, errors, and the sender seam.

use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling the Telegram Bot API.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The HTTP request to the Bot API failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The Bot API returned a non-success HTTP status.
    #[error("API response error: status {status}: {body}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Rendering mode Telegram applies to the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
}

/// Body of a `sendMessage` call.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: ParseMode,
}

// =============================================================================
// SENDER TRAIT
// =============================================================================

/// Delivers a pre-rendered text message to the fixed destination chat.
///
/// `TelegramClient` is the production implementation; tests substitute
/// recording mocks.
#[async_trait::async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `text` once. Any non-2xx answer or transport failure is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`TelegramError`] if the request fails or is rejected.
    async fn send_text(&self, text: &str) -> Result<(), TelegramError>;
}
