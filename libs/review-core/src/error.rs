//! Error types for review-core.

use thiserror::Error;

/// Result type alias using EntryError.
pub type Result<T> = std::result::Result<T, EntryError>;

/// Validation failures raised while building or updating an entry.
///
/// Every variant is a caller-input problem; the entry is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EntryError {
    #[error("title cannot be empty")]
    TitleEmpty,

    #[error("title exceeds maximum length")]
    TitleTooLong,

    #[error("description exceeds maximum length")]
    DescriptionTooLong,

    #[error("category cannot be empty")]
    CategoryEmpty,

    #[error("category exceeds maximum length")]
    CategoryTooLong,

    #[error("invalid recall value: {0}")]
    InvalidRecall(f32),

    #[error("interval out of range: {0} days")]
    InvalidInterval(u32),
}
