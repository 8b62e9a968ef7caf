//! # Fixture Generator
//!
//! Produces the synthetic live-stream event fixture the review UI
//! browses. Records are generated once at startup; ids are dense from 1
//! and timestamps fall within the seven days before generation time.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::model::{Behavior, Platform, Record};

/// Number of records generated when no count is given.
pub const DEFAULT_COUNT: usize = 125;

/// Timestamps are spread over this window before generation time.
const TIMESTAMP_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Fixture generation parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of records to generate.
    pub count: usize,
    /// RNG seed. A fixed seed makes the fixture reproducible.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

/// Generates the synthetic record fixture.
pub fn generate(config: &GeneratorConfig) -> Vec<Record> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let now = Utc::now().timestamp_millis();
    let mut records = Vec::with_capacity(config.count);

    for i in 1..=config.count as u64 {
        let timestamp = now - rng.gen_range(0..TIMESTAMP_WINDOW_MS);
        let platform = Platform::ALL[rng.gen_range(0..Platform::ALL.len())];
        let behavior = Behavior::ALL[rng.gen_range(0..Behavior::ALL.len())];
        let app_version = format!("10.{}.{}", rng.gen_range(0..20), rng.gen_range(0..100));
        let live_id = format!("l{}", 60000 + i);

        records.push(Record {
            id: i,
            anchor_id: format!("u{}", 10000 + i),
            detail_url: format!("https://example.com/detail?liveId={}&ts={}", live_id, timestamp),
            live_id,
            app_version,
            timestamp,
            platform,
            behavior,
            behavior_params: json!({ "gift_id": 100 + rng.gen_range(0..50) }).to_string(),
            extra_params: json!({}).to_string(),
            image_url: format!("https://picsum.photos/seed/{}/400/400", i),
        });
    }

    records
}
