//! Recall ratings recorded after each review.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// How well the user remembered an entry at its last review.
///
/// Persisted as its numeric value, which doubles as the interval
/// multiplier for the ratings that grow the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub enum Recall {
    /// Never rated. Only valid as the initial state of a new entry.
    NotReviewed,
    Failed,
    Hard,
    Good,
    Easy,
}

impl Default for Recall {
    fn default() -> Self {
        Self::NotReviewed
    }
}

impl Recall {
    /// Ratings a user can submit, weakest first.
    pub const RATINGS: [Recall; 4] = [Self::Failed, Self::Hard, Self::Good, Self::Easy];

    /// Numeric value of the rating.
    pub fn value(self) -> f32 {
        match self {
            Self::NotReviewed => -1.0,
            Self::Failed => 0.0,
            Self::Hard => 1.2,
            Self::Good => 2.0,
            Self::Easy => 2.5,
        }
    }

    /// Create from a numeric value. Only the five named values match.
    pub fn from_value(value: f32) -> Option<Self> {
        [
            Self::NotReviewed,
            Self::Failed,
            Self::Hard,
            Self::Good,
            Self::Easy,
        ]
        .into_iter()
        .find(|recall| recall.value() == value)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotReviewed => "Not Reviewed",
            Self::Failed => "Forgotten",
            Self::Hard => "Struggled",
            Self::Good => "Remembered",
            Self::Easy => "Mastered",
        }
    }

    /// Whether this is a rating a user can submit.
    pub fn is_rating(self) -> bool {
        !matches!(self, Self::NotReviewed)
    }

    /// Interval multiplier in tenths, so growth stays in integer math.
    pub(crate) fn multiplier_tenths(self) -> Option<u32> {
        match self {
            Self::NotReviewed | Self::Failed => None,
            Self::Hard => Some(12),
            Self::Good => Some(20),
            Self::Easy => Some(25),
        }
    }
}

impl fmt::Display for Recall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Recall> for f32 {
    fn from(recall: Recall) -> Self {
        recall.value()
    }
}

impl TryFrom<f32> for Recall {
    type Error = EntryError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(EntryError::InvalidRecall(value))
    }
}
