use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduler-allocated identifier, stable for the item's lifetime and never
/// reused within one scheduler instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One topic under spaced repetition. Subject and topic are opaque labels;
/// together they identify the item for duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id: ItemId,
    pub subject: String,
    pub topic: String,
    /// Days until the next scheduled review, always >= 1.
    pub interval_days: u32,
    /// Retention factor, floored at 1.3; higher means easier.
    pub ease: f32,
    pub review_count: u32,
    pub next_review_date: NaiveDate,
    pub last_review_date: Option<NaiveDate>,
}

impl ReviewItem {
    pub fn is_due(&self, as_of: NaiveDate) -> bool {
        self.next_review_date <= as_of
    }
}
