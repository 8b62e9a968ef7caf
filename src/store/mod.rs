//! # Record Store
//!
//! Holds the full record collection for the process lifetime. The store
//! is built once at startup and never mutated afterwards, so it can be
//! shared across request handlers without coordination.

pub mod generator;

pub use generator::GeneratorConfig;

use crate::model::Record;

/// Immutable, ordered collection of event records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a store over an already-materialized record collection.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Generates a synthetic fixture and wraps it in a store.
    pub fn generate(config: &GeneratorConfig) -> Self {
        Self::from_records(generator::generate(config))
    }

    /// The full record collection, in generation order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
