//! Report ingestion API binary.
//!
//! Accepts JSON-encoded reports on POST /report and echoes the parsed value
//! back in a response envelope. Every other method+path gets a 404 envelope.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use report_api::config::loader::ConfigError;
use report_api::config::validation::validate_config;
use report_api::config::{load_config, ServerConfig};
use report_api::observability::logging;
use report_api::{ReportServer, Shutdown};

#[derive(Parser)]
#[command(name = "report-api")]
#[command(about = "HTTP endpoint that accepts and echoes JSON reports", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file.
    #[arg(short, long, env = "REPORT_API_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        // Overrides bypass the loader, so re-run the semantic checks.
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("report-api v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let server = ReportServer::new(&config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
