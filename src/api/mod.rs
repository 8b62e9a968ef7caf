//! # HTTP API
//!
//! Axum-based HTTP boundary: route definitions, request handlers, the
//! external record projection, and error mapping.

pub mod config;
pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{HealthResponse, QueryResponse, ReviewItem};
pub use server::ApiServer;
