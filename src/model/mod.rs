//! # Data Model
//!
//! Record types for live-stream events and the version encoding used
//! for range filtering.

pub mod record;
pub mod version;

pub use record::{Behavior, Platform, Record};
