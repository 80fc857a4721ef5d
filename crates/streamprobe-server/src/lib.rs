//! Streamprobe Web Server - Axum + Leptos SSR
//!
//! Serves the analyzer dashboard and the JSON probe API. Each request runs
//! one synchronous probe on the blocking thread pool; the server holds no
//! mutable state between probes.

pub mod api;
pub mod ui;

use axum::http::{header, HeaderValue};
use axum::Router;
use std::sync::Arc;
use streamprobe_core::resolve::UrlResolver;
use streamprobe_core::{HttpFrameSampler, ProbeConfig, ProbeEngine};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Shared application state accessible from all handlers
#[derive(Clone)]
pub struct AppState {
    /// Probe engine over the production HTTP sampler
    pub engine: Arc<ProbeEngine<HttpFrameSampler>>,
    /// Hosting-provider URL resolver
    pub resolver: Arc<UrlResolver>,
    /// Server configuration
    pub config: ServerConfig,
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Bind address
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8930,
            bind_addr: "0.0.0.0".to_string(),
        }
    }
}

impl AppState {
    /// Create a new AppState with an engine built from `probe_config`
    pub fn new(config: ServerConfig, probe_config: ProbeConfig) -> Self {
        Self {
            engine: Arc::new(ProbeEngine::with_http(probe_config)),
            resolver: Arc::new(UrlResolver::new()),
            config,
        }
    }
}

/// Build the Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Leptos SSR page
        .route("/", axum::routing::get(ui::dashboard::dashboard_page))
        // REST API
        .route("/api/v1/probe", axum::routing::get(api::probe_stream))
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

/// Start the web server
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.bind_addr, state.config.port);
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Streamprobe web server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
