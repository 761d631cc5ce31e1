//! DataTech Dashboard Server
//!
//! Run with: cargo run --bin datatech-dashboard
//!
//! # Configuration
//!
//! Config file (first found): `$CONFIG_DIR/datatech-dashboard/config.toml`,
//! `/etc/datatech-dashboard/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `DASHBOARD_CONFIG`: Explicit config file path
//! - `DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DASHBOARD_PORT`: Port to listen on (default: 8501)
//! - `DASHBOARD_SEED`: Generator seed (default: 42)
//! - `DASHBOARD_LOG_LEVEL`, `DASHBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter

use datatech_dashboard::api::{serve, AppState};
use datatech_dashboard::config::Config;
use datatech_dashboard::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("DASHBOARD_CONFIG") {
        Ok(path) => Config::load_with_env(std::path::Path::new(&path))?,
        Err(_) => Config::load_default(),
    };

    init_logging(&config.logging);

    tracing::info!("Starting DataTech Dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Generator seed: {}", config.dashboard.seed);

    let state = AppState::new(config.dashboard.clone(), config.server.clone());
    serve(state).await?;

    tracing::info!("DataTech Dashboard stopped");
    Ok(())
}
