//! # Request Normalization
//!
//! Parses raw query parameters into a typed, internally consistent
//! filter specification. The contract is deliberately lenient: malformed
//! values degrade to safe defaults instead of surfacing errors, so
//! normalization never fails and a half-typed filter in the review UI
//! yields an empty or default result rather than a 400.

use std::collections::HashSet;

use crate::model::version;

/// Page number used when none is provided.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none is provided.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Normalized, typed filter specification for one query.
///
/// Built fresh per request and discarded once the response is produced.
/// `None` / empty-set fields impose no restriction on their dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Lowercased substring filter on anchor id.
    pub anchor_id: Option<String>,
    /// Lowercased substring filter on live id.
    pub live_id: Option<String>,
    /// Exact-match platform set; empty means unrestricted. Values are
    /// kept verbatim, so an unknown platform simply matches nothing.
    pub platforms: HashSet<String>,
    /// Exact-match behavior set; empty means unrestricted.
    pub behaviors: HashSet<String>,
    /// Inclusive lower version bound, already codec-encoded.
    pub version_min: Option<i64>,
    /// Inclusive upper version bound, already codec-encoded.
    pub version_max: Option<i64>,
    /// Inclusive lower timestamp bound, ms since epoch.
    pub start_time: Option<i64>,
    /// Inclusive upper timestamp bound, ms since epoch.
    pub end_time: Option<i64>,
    /// 1-based page number.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            anchor_id: None,
            live_id: None,
            platforms: HashSet::new(),
            behaviors: HashSet::new(),
            version_min: None,
            version_max: None,
            start_time: None,
            end_time: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryRequest {
    /// Normalizes raw query pairs into a typed request.
    ///
    /// Pairs may repeat: `platforms` and `behaviors` accumulate into
    /// sets, scalar keys take the last value seen. Empty values count as
    /// "not provided". Unparsable integers degrade to `0`, and
    /// non-positive paging values fall back to the defaults.
    pub fn normalize(params: &[(String, String)]) -> Self {
        let mut request = Self::default();
        let mut page: i64 = 0;
        let mut page_size: i64 = 0;

        for (key, value) in params {
            match key.as_str() {
                "anchorId" => request.anchor_id = non_empty_lowercase(value),
                "liveId" => request.live_id = non_empty_lowercase(value),
                "platforms" => {
                    if !value.is_empty() {
                        request.platforms.insert(value.clone());
                    }
                }
                "behaviors" => {
                    if !value.is_empty() {
                        request.behaviors.insert(value.clone());
                    }
                }
                "appVersionMin" => {
                    request.version_min = non_empty(value).map(version::encode);
                }
                "appVersionMax" => {
                    request.version_max = non_empty(value).map(version::encode);
                }
                "startTime" => request.start_time = non_empty(value).map(lenient_i64),
                "endTime" => request.end_time = non_empty(value).map(lenient_i64),
                "page" => page = lenient_i64(value),
                "pageSize" => page_size = lenient_i64(value),
                // Unknown parameters are ignored.
                _ => {}
            }
        }

        if page >= 1 {
            request.page = page as usize;
        }
        if page_size >= 1 {
            request.page_size = page_size as usize;
        }

        request
    }
}

/// Treats an empty string as "not provided".
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Non-empty values lowercased for case-insensitive matching.
fn non_empty_lowercase(value: &str) -> Option<String> {
    non_empty(value).map(str::to_lowercase)
}

/// Best-effort integer parse; garbage degrades to `0`.
fn lenient_i64(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}
