//! # Response Types
//!
//! External wire shapes and the projection that strips internal-only
//! data before records leave the core boundary.

use serde::Serialize;

use crate::model::{Behavior, Platform, Record};
use crate::query::QueryResult;

/// Externally visible record: every record field except the derived
/// version key, camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: u64,
    pub anchor_id: String,
    pub live_id: String,
    pub app_version: String,
    pub timestamp: i64,
    pub platform: Platform,
    pub behavior: Behavior,
    pub behavior_params: String,
    pub extra_params: String,
    pub image_url: String,
    pub detail_url: String,
}

impl From<&Record> for ReviewItem {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            anchor_id: record.anchor_id.clone(),
            live_id: record.live_id.clone(),
            app_version: record.app_version.clone(),
            timestamp: record.timestamp,
            platform: record.platform,
            behavior: record.behavior,
            behavior_params: record.behavior_params.clone(),
            extra_params: record.extra_params.clone(),
            image_url: record.image_url.clone(),
            detail_url: record.detail_url.clone(),
        }
    }
}

/// Query response: pre-pagination total plus the requested page.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub total: usize,
    pub items: Vec<ReviewItem>,
}

impl QueryResponse {
    /// Projects an execution result into the external shape.
    pub fn from_result(result: &QueryResult<'_>) -> Self {
        Self {
            total: result.total,
            items: result.items.iter().map(|r| ReviewItem::from(*r)).collect(),
        }
    }
}

/// Health probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    /// The fixed "operational" signal.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
