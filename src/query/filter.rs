//! # Predicate Filtering
//!
//! Evaluates a normalized request against a record. Dimensions combine
//! with AND semantics; the platform and behavior sets are OR within
//! their dimension. An unprovided dimension is vacuously true.

use crate::model::Record;

use super::request::QueryRequest;

/// Evaluates filter predicates against records.
pub struct RecordFilter;

impl RecordFilter {
    /// Checks whether a record satisfies every provided predicate.
    pub fn matches(record: &Record, request: &QueryRequest) -> bool {
        Self::substring_match(&record.anchor_id, request.anchor_id.as_deref())
            && Self::substring_match(&record.live_id, request.live_id.as_deref())
            && Self::set_match(record.platform.as_str(), &request.platforms)
            && Self::set_match(record.behavior.as_str(), &request.behaviors)
            && Self::range_match(
                record.version_key(),
                request.version_min,
                request.version_max,
            )
            && Self::range_match(record.timestamp, request.start_time, request.end_time)
    }

    /// Case-insensitive containment; the needle is already lowercased.
    fn substring_match(value: &str, needle: Option<&str>) -> bool {
        match needle {
            Some(needle) => value.to_lowercase().contains(needle),
            None => true,
        }
    }

    /// Exact membership; an empty set imposes no restriction.
    fn set_match(value: &str, allowed: &std::collections::HashSet<String>) -> bool {
        allowed.is_empty() || allowed.contains(value)
    }

    /// Inclusive range with independently optional bounds. An inverted
    /// range matches nothing rather than erroring.
    fn range_match(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
        min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
    }
}
