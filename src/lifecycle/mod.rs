//! Process lifecycle: startup sequencing lives in main, shutdown here.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is cooperative via a broadcast channel so tests can stop
//!   server instances deterministically

pub mod shutdown;

pub use shutdown::Shutdown;
