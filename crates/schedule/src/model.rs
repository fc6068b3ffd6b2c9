//! Schedule data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of one scheduled item. The scheduler only ever creates
/// `Pending`; the publishing system owns the later transitions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Posted,
    Failed,
}

impl Default for PostStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// One send slot for one platform.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformScheduleItem {
    pub platform: String,
    /// "post", "story", "reel", "video", "newsletter", ...
    pub post_type: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub status: PostStatus,
}

/// A week of send slots across all requested platforms, sorted ascending
/// by `scheduled_for`. Built fresh per request, never persisted here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// IANA zone name, carried through for display formatting.
    pub timezone: String,
    pub items: Vec<PlatformScheduleItem>,
}
