//! streamlens - review backend for synthetic live-stream event records
//!
//! Generates an in-memory fixture of moderation events and serves a
//! filter/sort/paginate query API over it.

pub mod api;
pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
