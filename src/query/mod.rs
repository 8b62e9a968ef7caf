//! # Query Engine
//!
//! Turns raw, optionally repeated query parameters into a normalized
//! filter specification and executes it against the record store:
//! filter, sort, count, paginate.

pub mod engine;
pub mod filter;
pub mod request;

pub use engine::{QueryEngine, QueryResult};
pub use request::QueryRequest;
