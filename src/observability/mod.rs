//! Observability subsystem.
//!
//! Diagnostic logging only: per-request log events carry the request ID,
//! method, and path, and the process logs its bound address at startup.

pub mod logging;
