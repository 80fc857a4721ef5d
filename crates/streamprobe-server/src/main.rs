//! Streamprobe server binary
//!
//! Starts the Axum server with a probe engine built from default timeouts.
//! PORT overrides the listen port.

use streamprobe_core::ProbeConfig;
use streamprobe_server::{start_server, AppState, ServerConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("streamprobe_server=info".parse().unwrap())
                .add_directive("streamprobe_core=info".parse().unwrap()),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8930u16);

    let config = ServerConfig {
        port,
        ..ServerConfig::default()
    };
    let state = AppState::new(config, ProbeConfig::default());

    tracing::info!(port, version = streamprobe_core::VERSION, "Streamprobe starting");

    if let Err(e) = start_server(state).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
