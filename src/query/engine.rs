//! # Query Execution
//!
//! Runs a normalized request against the record collection in a fixed
//! phase order: filter, sort, count, paginate. A full scan per query is
//! the intended design point for this in-memory, modest-size working
//! set; no index structures are kept.

use crate::model::Record;

use super::filter::RecordFilter;
use super::request::QueryRequest;

/// Result of one query execution.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Size of the filtered set before pagination.
    pub total: usize,
    /// The requested page, most recent first.
    pub items: Vec<&'a Record>,
}

/// Executes queries over an immutable record collection.
pub struct QueryEngine;

impl QueryEngine {
    /// Filters, sorts, counts, and paginates.
    ///
    /// Ordering is timestamp descending with id descending as tiebreak,
    /// so identical inputs always produce identical pages. A page past
    /// the end of the filtered set yields an empty page with `total`
    /// unchanged. This function has no failure modes: normalization has
    /// already degraded anything malformed.
    pub fn execute<'a>(records: &'a [Record], request: &QueryRequest) -> QueryResult<'a> {
        let mut matched: Vec<&Record> = records
            .iter()
            .filter(|record| RecordFilter::matches(record, request))
            .collect();

        matched.sort_unstable_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matched.len();

        let start = (request.page - 1).saturating_mul(request.page_size);
        let items = if start >= total {
            Vec::new()
        } else {
            let end = start.saturating_add(request.page_size).min(total);
            matched[start..end].to_vec()
        };

        QueryResult { total, items }
    }
}
