//! Telegram configuration parsed from environment variables.

use std::fmt;

use super::types::TelegramError;

pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TELEGRAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TELEGRAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub base_url: String,
    pub timeouts: TelegramTimeouts,
}

impl TelegramConfig {
    /// Build typed Telegram config from environment variables.
    ///
    /// Required:
    /// - `TELEGRAM_BOT_TOKEN`
    /// - `TELEGRAM_CHAT_ID`
    ///
    /// Optional:
    /// - `TELEGRAM_API_BASE_URL`: default `https://api.telegram.org`
    /// - `TELEGRAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TELEGRAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or blank.
    pub fn from_env() -> Result<Self, TelegramError> {
        let bot_token = required_env("TELEGRAM_BOT_TOKEN")?;
        let chat_id = required_env("TELEGRAM_CHAT_ID")?;
        let base_url = std::env::var("TELEGRAM_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = TelegramTimeouts {
            request_secs: env_parse_u64("TELEGRAM_REQUEST_TIMEOUT_SECS", DEFAULT_TELEGRAM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TELEGRAM_CONNECT_TIMEOUT_SECS", DEFAULT_TELEGRAM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { bot_token, chat_id, base_url, timeouts })
    }

    /// Full `sendMessage` URL. Contains the bot token; never log it.
    #[must_use]
    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

fn required_env(key: &str) -> Result<String, TelegramError> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TelegramError::MissingConfig { var: key.into() })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
