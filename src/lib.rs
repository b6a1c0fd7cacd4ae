//! Report ingestion API library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::ReportServer;
pub use lifecycle::Shutdown;
