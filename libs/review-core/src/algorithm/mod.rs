//! Interval scheduling strategies.

pub mod fixed;

use crate::recall::Recall;
use chrono::{DateTime, Utc};

/// Result of scheduling an entry after a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingResult {
    pub interval: u32,
    pub review_date: DateTime<Utc>,
}

/// Trait for interval scheduling strategies.
pub trait IntervalScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next interval and review date from the current
    /// interval and the latest recall rating. The returned interval must
    /// lie in `1..=INTERVAL_LIMIT`.
    fn schedule(&self, interval: u32, recall: Recall, now: DateTime<Utc>) -> SchedulingResult;
}
