//! Structured logging.
//!
//! Uses the tracing crate; the level comes from configuration, with
//! `RUST_LOG` taking precedence when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `log_level` is the configured default filter, e.g. "info" or
/// "report_api=debug,tower_http=debug".
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
