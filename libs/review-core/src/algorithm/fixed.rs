//! Fixed-multiplier scheduler.
//!
//! Each rating scales the current interval by a constant factor:
//! - Failed (and NotReviewed): reset to 1 day
//! - Hard: x1.2
//! - Good: x2
//! - Easy: x2.5
//!
//! Results are floored and capped. There is no ease factor.

use super::{IntervalScheduler, SchedulingResult};
use crate::recall::Recall;
use chrono::{DateTime, Duration, Utc};

/// Longest interval in days the default scheduler will produce.
pub const INTERVAL_LIMIT: u32 = 90;

/// Fixed-multiplier scheduler with a configurable interval cap.
#[derive(Debug, Clone)]
pub struct FixedMultiplier {
    interval_cap: u32,
}

impl FixedMultiplier {
    /// Scheduler with a lower cap. The cap is clamped to `1..=INTERVAL_LIMIT`.
    pub fn with_cap(interval_cap: u32) -> Self {
        Self {
            interval_cap: interval_cap.clamp(1, INTERVAL_LIMIT),
        }
    }

    pub fn interval_cap(&self) -> u32 {
        self.interval_cap
    }
}

impl Default for FixedMultiplier {
    fn default() -> Self {
        Self {
            interval_cap: INTERVAL_LIMIT,
        }
    }
}

impl IntervalScheduler for FixedMultiplier {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn schedule(&self, interval: u32, recall: Recall, now: DateTime<Utc>) -> SchedulingResult {
        let next = match recall.multiplier_tenths() {
            Some(tenths) => (u64::from(interval) * u64::from(tenths) / 10)
                .min(u64::from(self.interval_cap)) as u32,
            None => 1,
        };
        // a zero input interval would otherwise stay at zero
        let next = next.max(1);

        SchedulingResult {
            interval: next,
            review_date: now + Duration::days(i64::from(next)),
        }
    }
}
