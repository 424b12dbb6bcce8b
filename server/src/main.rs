mod routes;
mod services;
mod state;
mod telegram;

use std::sync::Arc;

use telegram::{MessageSender, TelegramClient};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Missing messaging config is non-fatal: the page renders, submissions get 503.
    let messenger: Option<Arc<dyn MessageSender>> = match TelegramClient::from_env() {
        Ok(client) => {
            tracing::info!(chat_id = client.chat_id(), "telegram messenger initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "telegram messenger not configured; contact form disabled");
            None
        }
    };

    let site_owner = services::contact::site_owner_from_env();
    let state = state::AppState::new(messenger, &site_owner);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
