//! # Event Records
//!
//! The immutable live-stream event record and its enumerated dimensions.

use serde::{Deserialize, Serialize};

use super::version;

/// Client platform an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
    Web,
}

impl Platform {
    /// All platforms, in a fixed order. Used by the fixture generator.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// Wire representation of this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Web => "Web",
        }
    }
}

/// User behavior captured by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    GiftSend,
    Comment,
    Share,
    Follow,
    Like,
}

impl Behavior {
    /// All behaviors, in a fixed order. Used by the fixture generator.
    pub const ALL: [Behavior; 5] = [
        Behavior::GiftSend,
        Behavior::Comment,
        Behavior::Share,
        Behavior::Follow,
        Behavior::Like,
    ];

    /// Wire representation of this behavior.
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::GiftSend => "gift_send",
            Behavior::Comment => "comment",
            Behavior::Share => "share",
            Behavior::Follow => "follow",
            Behavior::Like => "like",
        }
    }
}

/// One live-stream event entry, immutable once generated.
///
/// `behavior_params` and `extra_params` are opaque serialized blobs that
/// pass through the system unmodified. The integer version key is not
/// stored; it is recomputed from `app_version` on demand, so the two can
/// never diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique id, assigned densely from 1 at generation time.
    pub id: u64,
    pub anchor_id: String,
    pub live_id: String,
    /// Dotted "X.Y.Z" app version string.
    pub app_version: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub platform: Platform,
    pub behavior: Behavior,
    pub behavior_params: String,
    pub extra_params: String,
    pub image_url: String,
    pub detail_url: String,
}

impl Record {
    /// Comparable integer key for this record's app version.
    pub fn version_key(&self) -> i64 {
        version::encode(&self.app_version)
    }
}
