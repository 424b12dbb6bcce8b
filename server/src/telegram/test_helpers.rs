//! Fake Telegram Bot API for tests.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::Value;

use super::config::{TelegramConfig, TelegramTimeouts};

/// `(bot path segment, JSON body)` for every `sendMessage` call received.
pub type RecordedCalls = Arc<Mutex<Vec<(String, Value)>>>;

pub const TEST_BOT_TOKEN: &str = "123:abc";
pub const TEST_CHAT_ID: &str = "843000000";
/// Body the fake API answers with on non-2xx, shaped like a real Bot API rejection.
pub const REJECTION_BODY: &str =
    r#"{"ok":false,"error_code":400,"description":"Bad Request: can't parse entities"}"#;

#[derive(Clone)]
struct MockBotApi {
    status: StatusCode,
    calls: RecordedCalls,
}

async fn mock_send_message(
    State(mock): State<MockBotApi>,
    Path(bot_path): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, &'static str) {
    mock.calls.lock().unwrap().push((bot_path, body));
    if mock.status.is_success() {
        (mock.status, r#"{"ok":true}"#)
    } else {
        (mock.status, REJECTION_BODY)
    }
}

/// Serve a fake `sendMessage` endpoint on an ephemeral port and return its base URL.
pub async fn spawn_mock_bot_api(status: StatusCode) -> (String, RecordedCalls) {
    let calls: RecordedCalls = Arc::new(Mutex::new(Vec::new()));
    let mock = MockBotApi { status, calls: calls.clone() };
    let app = Router::new()
        .route("/{bot_path}/sendMessage", post(mock_send_message))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), calls)
}

#[must_use]
pub fn test_config(base_url: String) -> TelegramConfig {
    TelegramConfig {
        bot_token: TEST_BOT_TOKEN.into(),
        chat_id: TEST_CHAT_ID.into(),
        base_url,
        timeouts: TelegramTimeouts { request_secs: 5, connect_secs: 2 },
    }
}
