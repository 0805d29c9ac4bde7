pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod sheet;

pub use config::{AppConfig, CliArgs, ColumnNames, Command};
pub use error::SummaryError;
pub use logging::{LoggingConfig, init_logging};
pub use pipeline::{PackingReport, summarize, summarize_bytes, summarize_file};

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_server(config: AppConfig) -> Result<()> {
    let bind = config.http_bind_address;
    let router = server::router(Arc::new(config));

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(address = %bind, "packing-list upload server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("upload server terminated")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
