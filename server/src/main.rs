#![recursion_limit = "256"]

mod mail;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use mail::{ConfigError, ContactMailer, EmailJsClient, EmailJsConfig};

#[tokio::main]
async fn main() {
    // A missing .env is normal in production; the environment wins anyway.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the contact mailer (non-fatal: the endpoint answers 503 without it).
    let mailer = build_mailer();
    let rate_limiter = rate_limit::RateLimiter::new();
    let limits = rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        per_client_window_secs = limits.per_client_window.as_secs(),
        global = limits.global_limit,
        global_window_secs = limits.global_window.as_secs(),
        "contact rate limits"
    );

    let trust_forwarded_for = mail::config::env_bool("TRUST_FORWARDED_FOR").unwrap_or(false);
    let state = state::AppState::new(mailer, rate_limiter).with_trust_forwarded_for(trust_forwarded_for);

    let app = routes::app(state).expect("router setup failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}

fn build_mailer() -> Option<Arc<dyn ContactMailer>> {
    let config = match EmailJsConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::Disabled) => {
            tracing::info!("contact delivery disabled");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "mailer not configured, contact form disabled");
            return None;
        }
    };
    match EmailJsClient::new(config) {
        Ok(client) => {
            tracing::info!(service_id = client.service_id(), "EmailJS mailer initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "EmailJS client build failed, contact form disabled");
            None
        }
    }
}
