use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`] so env mutations do not race.
unsafe fn clear_telegram_env() {
    unsafe {
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
        std::env::remove_var("TELEGRAM_API_BASE_URL");
        std::env::remove_var("TELEGRAM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("TELEGRAM_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_guard();
    unsafe {
        clear_telegram_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
        std::env::set_var("TELEGRAM_CHAT_ID", "42");
    }

    let cfg = TelegramConfig::from_env().unwrap();
    assert_eq!(cfg.bot_token, "123:abc");
    assert_eq!(cfg.chat_id, "42");
    assert_eq!(cfg.base_url, DEFAULT_TELEGRAM_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        TelegramTimeouts {
            request_secs: DEFAULT_TELEGRAM_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_TELEGRAM_CONNECT_TIMEOUT_SECS,
        }
    );

    unsafe { clear_telegram_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_telegram_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
        std::env::set_var("TELEGRAM_CHAT_ID", "42");
        std::env::set_var("TELEGRAM_API_BASE_URL", "http://127.0.0.1:9999/");
        std::env::set_var("TELEGRAM_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("TELEGRAM_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = TelegramConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
    assert_eq!(cfg.timeouts, TelegramTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_telegram_env() };
}

#[test]
fn from_env_invalid_timeout_falls_back_to_default() {
    let _guard = env_guard();
    unsafe {
        clear_telegram_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
        std::env::set_var("TELEGRAM_CHAT_ID", "42");
        std::env::set_var("TELEGRAM_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = TelegramConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_TELEGRAM_REQUEST_TIMEOUT_SECS);

    unsafe { clear_telegram_env() };
}

#[test]
fn from_env_missing_token_errors() {
    let _guard = env_guard();
    unsafe {
        clear_telegram_env();
        std::env::set_var("TELEGRAM_CHAT_ID", "42");
    }

    let err = TelegramConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TELEGRAM_BOT_TOKEN"));

    unsafe { clear_telegram_env() };
}

#[test]
fn from_env_blank_chat_id_errors() {
    let _guard = env_guard();
    unsafe {
        clear_telegram_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
        std::env::set_var("TELEGRAM_CHAT_ID", "   ");
    }

    let err = TelegramConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TELEGRAM_CHAT_ID"));

    unsafe { clear_telegram_env() };
}

#[test]
fn send_message_url_embeds_token() {
    let cfg = TelegramConfig {
        bot_token: "123:abc".into(),
        chat_id: "42".into(),
        base_url: "https://api.telegram.org".into(),
        timeouts: TelegramTimeouts { request_secs: 1, connect_secs: 1 },
    };
    assert_eq!(cfg.send_message_url(), "https://api.telegram.org/bot123:abc/sendMessage");
}

#[test]
fn debug_redacts_token() {
    let cfg = TelegramConfig {
        bot_token: "123:very-secret".into(),
        chat_id: "42".into(),
        base_url: DEFAULT_TELEGRAM_BASE_URL.into(),
        timeouts: TelegramTimeouts { request_secs: 1, connect_secs: 1 },
    };
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("very-secret"));
    assert!(rendered.contains("<redacted>"));
}
