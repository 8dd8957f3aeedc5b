//! Shared helpers for review-core integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use review_core::{Entry, Recall};

/// Run `rounds` full review cycles with the same rating.
pub fn review(entry: &mut Entry, recall: Recall, rounds: usize) {
    for _ in 0..rounds {
        entry.update_recall(recall).unwrap();
        entry.update_interval();
    }
}

/// Assert two instants are within one second of each other.
pub fn assert_close(actual: DateTime<Utc>, expected: DateTime<Utc>) {
    let diff_ms = (actual - expected).num_milliseconds().abs();
    assert!(
        diff_ms <= Duration::seconds(1).num_milliseconds(),
        "expected {actual} within 1s of {expected}, diff {diff_ms}ms"
    );
}
