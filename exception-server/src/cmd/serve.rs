//! `exception-server serve` command — start the HTTP server.
//!
//! Reads optional TOML configuration, builds the standard scenario table,
//! then serves it with graceful shutdown on SIGTERM / SIGINT.

use std::path::Path;

use dotenvy::dotenv;

use crate::config::{Config, load_config};
use crate::error::Error;
use crate::scenario::ScenarioTable;
use crate::server;
use crate::signal::shutdown_token;

/// Execute the `serve` command.
///
/// Without `config_path` the server runs on defaults (see [`Config`]).
///
/// # Errors
///
/// Returns an error if configuration loading or server binding fails.
pub async fn run(config_path: Option<&Path>) -> Result<(), Error> {
    dotenv().ok();

    let config = config_path.map_or_else(|| Ok(Config::default()), load_config)?;

    #[cfg(feature = "telemetry")]
    crate::telemetry::init(config.log_level());

    let scenarios = ScenarioTable::standard();
    #[cfg(feature = "telemetry")]
    tracing::info!(count = scenarios.len(), "scenarios registered");
    let app = server::app(scenarios);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await;
    #[cfg(feature = "telemetry")]
    let listener = listener.inspect_err(|e| tracing::error!("Failed to bind to {}: {}", addr, e));
    let listener = listener?;

    let shutdown = shutdown_token()?;
    server::serve(listener, app, async move { shutdown.cancelled().await }).await
}
