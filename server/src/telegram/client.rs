//! Telegram Bot API client for the `sendMessage` method.

use std::time::Duration;

use super::config::TelegramConfig;
use super::types::{MessageSender, ParseMode, SendMessageRequest, TelegramError};

pub struct TelegramClient {
    http: reqwest::Client,
    /// Carries the bot token; kept out of logs and error strings.
    url: String,
    chat_id: String,
}

impl TelegramClient {
    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TelegramError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.send_message_url(), chat_id: config.chat_id })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, TelegramError> {
        Self::new(TelegramConfig::from_env()?)
    }

    /// Destination chat identifier.
    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

#[async_trait::async_trait]
impl MessageSender for TelegramClient {
    async fn send_text(&self, text: &str) -> Result<(), TelegramError> {
        let body = SendMessageRequest { chat_id: &self.chat_id, text, parse_mode: ParseMode::Html };
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TelegramError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TelegramError::ApiResponse { status: status.as_u16(), body })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
