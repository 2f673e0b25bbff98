//! Intrusion Detection Dashboard
//!
//! Serves a single-page form describing a network session, forwards the encoded
//! session to a remote intrusion model and renders its verdict and confidence.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  INTRUSION DASHBOARD                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────┐   ┌────────────────────────┐ │
//! │  │ Dashboard │──▶│  Feature   │──▶│  Inference Client      │ │
//! │  │ (Axum)    │   │  Encoder   │   │  (reqwest)             │ │
//! │  └─────▲─────┘   └────────────┘   └───────────┬────────────┘ │
//! │        └──────── interpret (verdict + tier) ◀─┘              │
//! └───────────────────────────────────────────────┬──────────────┘
//!                                                 ▼
//!                                      remote inference endpoint
//! ```

mod config;
mod error;
mod features;
mod handlers;
mod inference;
mod models;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;

pub use error::{AppError, AppResult};

use inference::{InferenceClient, InferenceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_logging(&config);

    tracing::info!("Intrusion Detection Dashboard starting...");
    tracing::info!(
        "Inference endpoint: {} (timeout {}s, retries {})",
        config.inference_host(),
        config.inference_timeout_secs,
        config.inference_max_retries
    );

    let client = InferenceClient::new(InferenceConfig::from(&config))
        .context("Failed to create inference HTTP client")?;

    // Build application state
    let state = AppState {
        config: config.clone(),
        client,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}

fn init_logging(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "intrusion_dashboard=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: InferenceClient,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Dashboard page
    let page_routes = Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/predict", post(handlers::dashboard::predict));

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::api::predict))
        .route("/api/v1/model/layout", get(handlers::api::layout));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
