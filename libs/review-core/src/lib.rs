//! Spaced repetition scheduling for review entries.
//!
//! Provides:
//! - Validated review entries (title, description, category)
//! - Recall ratings with their interval multipliers
//! - A fixed-multiplier interval scheduler capped at 90 days

pub mod algorithm;
pub mod entry;
pub mod error;
pub mod recall;

pub use algorithm::fixed::{FixedMultiplier, INTERVAL_LIMIT};
pub use algorithm::{IntervalScheduler, SchedulingResult};
pub use entry::{
    Entry, EntryBuilder, DEFAULT_CATEGORY, MAX_CATEGORY_LENGTH, MAX_DESCRIPTION_LENGTH,
    MAX_TITLE_LENGTH,
};
pub use error::{EntryError, Result};
pub use recall::Recall;
