//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route dispatch)
//!     → request.rs (request ID)
//!     → envelope.rs (success/failure response bodies)
//!     → Send to client
//! ```

pub mod envelope;
pub mod request;
pub mod server;

pub use envelope::{ApiError, ReportReceived};
pub use server::{app, ReportServer};
