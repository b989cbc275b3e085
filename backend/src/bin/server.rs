//! Staffing grid HTTP server binary.
//!
//! Loads configuration, tries the default schedule file once, then serves the
//! dashboard over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin staffing-server
//!
//! # Preload a schedule
//! STAFFING_DEFAULT_FILE=outputs/schedule.csv cargo run --bin staffing-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STAFFING_CONFIG`: Path to a `staffing.toml` (default: searched)
//! - `STAFFING_DEFAULT_FILE`: Schedule loaded at startup, best effort
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use staffing_grid::config::AppConfig;
use staffing_grid::http::{create_router, AppState};
use staffing_grid::services::{prepare_autoload, FileSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting staffing grid server");

    let config = AppConfig::load()?;
    let state = AppState::new(config.server.max_body_bytes);

    // Best effort: a missing or broken default file leaves the dashboard empty.
    if let Some(path) = &config.dashboard.default_file {
        let source = FileSource::new(path);
        if let Some(prepared) = prepare_autoload(&source).await {
            state.dashboard.write().commit(prepared);
        }
    }

    let app = create_router(state);

    let addr = config.socket_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
