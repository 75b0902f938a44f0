use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config {
    pub mod app_config;
}
mod api {
    pub mod webhook;
}
mod handlers {
    pub mod relay_handlers;
}

use api::webhook::WebhookClient;
use config::app_config::AppConfig;
use handlers::relay_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    webhook: WebhookClient,
}

/// Relay routes, one per form the site posts.
pub fn build_router(state: Arc<AppState>, frontend_origin: Option<HeaderValue>) -> Router {
    let allow_origin = match frontend_origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::any(),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/join", post(relay_handlers::relay_submission))
        .route("/api/service-inquiry", post(relay_handlers::relay_submission))
        .route("/api/start-project", post(relay_handlers::relay_submission))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(allow_origin)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let webhook = WebhookClient::new(config.webhook_url.clone(), config.webhook_timeout)?;
    tracing::info!("Relaying form submissions to {}", webhook.url().host_str().unwrap_or("webhook"));

    let state = Arc::new(AppState { webhook });
    let app = build_router(state, config.frontend_origin.clone());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
