//! End-to-end query scenarios over a seeded fixture.
//!
//! Drives the store, normalization, and engine together the way the
//! HTTP handler does, and checks the response projection shape.

use streamlens::api::QueryResponse;
use streamlens::model::version;
use streamlens::query::{QueryEngine, QueryRequest};
use streamlens::store::{GeneratorConfig, RecordStore};

fn seeded_store() -> RecordStore {
    RecordStore::generate(&GeneratorConfig {
        count: 125,
        seed: Some(2024),
    })
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn execute<'a>(store: &'a RecordStore, pairs: &[(&str, &str)]) -> (QueryRequest, streamlens::query::QueryResult<'a>) {
    let request = QueryRequest::normalize(&params(pairs));
    let result = QueryEngine::execute(store.records(), &request);
    (request, result)
}

#[test]
fn test_unfiltered_first_page() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[]);

    assert_eq!(result.total, 125);
    assert_eq!(result.items.len(), 10);

    let max_timestamp = store.records().iter().map(|r| r.timestamp).max().unwrap();
    assert_eq!(result.items[0].timestamp, max_timestamp);
}

#[test]
fn test_platform_filter_restricts_and_counts() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[("platforms", "iOS"), ("page", "1"), ("pageSize", "200")]);

    let expected = store
        .records()
        .iter()
        .filter(|r| r.platform.as_str() == "iOS")
        .count();

    assert_eq!(result.total, expected);
    assert_eq!(result.items.len(), expected);
    for item in &result.items {
        assert_eq!(item.platform.as_str(), "iOS");
    }
}

#[test]
fn test_version_range_bounds_encoded_keys() {
    let store = seeded_store();
    let (_, result) = execute(
        &store,
        &[
            ("appVersionMin", "10.11.0"),
            ("appVersionMax", "10.11.99"),
            ("pageSize", "200"),
        ],
    );

    for item in &result.items {
        let key = version::encode(&item.app_version);
        assert!((10_011_000..=10_011_099).contains(&key), "key {}", key);
    }

    let expected = store
        .records()
        .iter()
        .filter(|r| {
            let key = version::encode(&r.app_version);
            (10_011_000..=10_011_099).contains(&key)
        })
        .count();
    assert_eq!(result.total, expected);
}

#[test]
fn test_unmatched_anchor_is_empty_success() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[("anchorId", "no-such-anchor")]);

    assert_eq!(result.total, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_inverted_time_range_is_empty_success() {
    let store = seeded_store();
    let max_ts = store.records().iter().map(|r| r.timestamp).max().unwrap();
    let start = (max_ts + 1).to_string();
    let end = (max_ts - 1_000_000).to_string();

    let (_, result) = execute(&store, &[("startTime", &start), ("endTime", &end)]);

    assert_eq!(result.total, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_results_sorted_newest_first() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[("pageSize", "200")]);

    for window in result.items.windows(2) {
        let (a, b) = (window[0], window[1]);
        assert!(
            a.timestamp > b.timestamp || (a.timestamp == b.timestamp && a.id > b.id),
            "order violated between ids {} and {}",
            a.id,
            b.id
        );
    }
}

#[test]
fn test_pages_partition_the_result_set() {
    let store = seeded_store();

    let (_, full) = execute(&store, &[("pageSize", "200")]);
    let full_ids: Vec<u64> = full.items.iter().map(|r| r.id).collect();

    let mut paged_ids = Vec::new();
    for page in 1..=13 {
        let page = page.to_string();
        let (_, result) = execute(&store, &[("page", &page), ("pageSize", "10")]);
        paged_ids.extend(result.items.iter().map(|r| r.id));
    }

    assert_eq!(paged_ids, full_ids);
}

#[test]
fn test_page_beyond_end_is_empty_with_total() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[("page", "99"), ("pageSize", "50")]);

    assert_eq!(result.total, 125);
    assert!(result.items.is_empty());
}

#[test]
fn test_adding_filters_never_grows_total() {
    let store = seeded_store();

    let (_, base) = execute(&store, &[("platforms", "Android")]);
    let (_, narrowed) = execute(
        &store,
        &[("platforms", "Android"), ("behaviors", "gift_send")],
    );

    assert!(narrowed.total <= base.total);
}

#[test]
fn test_combined_filters_intersect() {
    let store = seeded_store();
    let (_, result) = execute(
        &store,
        &[
            ("platforms", "Android"),
            ("behaviors", "comment"),
            ("behaviors", "like"),
            ("pageSize", "200"),
        ],
    );

    for item in &result.items {
        assert_eq!(item.platform.as_str(), "Android");
        assert!(matches!(item.behavior.as_str(), "comment" | "like"));
    }
}

#[test]
fn test_anchor_substring_is_case_insensitive() {
    let store = seeded_store();

    let (_, lower) = execute(&store, &[("anchorId", "u100"), ("pageSize", "200")]);
    let (_, upper) = execute(&store, &[("anchorId", "U100"), ("pageSize", "200")]);

    assert!(lower.total > 0);
    assert_eq!(lower.total, upper.total);
}

#[test]
fn test_response_projection_shape() {
    let store = seeded_store();
    let (_, result) = execute(&store, &[]);

    let response = QueryResponse::from_result(&result);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["total"], 125);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);

    let first = items[0].as_object().unwrap();
    assert!(first.contains_key("anchorId"));
    assert!(first.contains_key("appVersion"));
    assert!(!first.contains_key("appVersionInt"));
}
