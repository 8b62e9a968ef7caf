//! # Observability
//!
//! Structured one-line JSON logging.

pub mod logger;

pub use logger::{Logger, Severity};
