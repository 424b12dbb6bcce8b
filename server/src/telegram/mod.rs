//! Telegram — outbound messaging adapter for contact submissions.
//!
//! DESIGN
//! ======
//! The bot token and destination chat live only in server-side environment
//! variables. Browsers talk to `/api/contact`; this module is the only code
//! that ever sees the credential.

pub mod client;
pub mod config;
pub mod types;

pub use client::TelegramClient;
pub use types::{MessageSender, TelegramError};

#[cfg(test)]
pub mod test_helpers;
