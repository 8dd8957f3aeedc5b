//! Review entries and their validated mutations.
//!
//! An entry moves through a repeating review cycle:
//! ```text
//! unreviewed --update_recall--> rated --update_interval--> scheduled
//!                                  ^                           |
//!                                  +---------------------------+
//! ```
//! Every update validates its input first and leaves the entry untouched
//! on error.

use crate::algorithm::fixed::{FixedMultiplier, INTERVAL_LIMIT};
use crate::algorithm::IntervalScheduler;
use crate::error::{EntryError, Result};
use crate::recall::Recall;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 4000;
pub const MAX_CATEGORY_LENGTH: usize = 30;

/// Category given to entries created without one.
pub const DEFAULT_CATEGORY: &str = "None";

/// A topic to be reviewed.
///
/// Loading from storage goes through the same field validation as
/// construction, so a stored entry that breaks an invariant fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry")]
pub struct Entry {
    id: i64,
    title: String,
    description: String,
    recall: Recall,
    category: String,
    interval: u32,
    review_date: DateTime<Utc>,
    last_review: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Entry as read back from storage, before validation.
#[derive(Debug, Deserialize)]
struct StoredEntry {
    id: i64,
    title: String,
    description: String,
    recall: Recall,
    category: String,
    interval: u32,
    review_date: DateTime<Utc>,
    #[serde(default)]
    last_review: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<StoredEntry> for Entry {
    type Error = EntryError;

    fn try_from(stored: StoredEntry) -> Result<Self> {
        validate_title(&stored.title)?;
        validate_description(&stored.description)?;
        validate_category(&stored.category)?;
        validate_interval(stored.interval)?;

        Ok(Self {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            recall: stored.recall,
            category: stored.category,
            interval: stored.interval,
            review_date: stored.review_date,
            last_review: stored.last_review,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        })
    }
}

// Lengths are byte lengths of the trimmed text.
fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(EntryError::TitleEmpty);
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(EntryError::TitleTooLong);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(EntryError::DescriptionTooLong);
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(EntryError::CategoryEmpty);
    }
    if category.len() > MAX_CATEGORY_LENGTH {
        return Err(EntryError::CategoryTooLong);
    }
    Ok(())
}

fn validate_interval(interval: u32) -> Result<()> {
    if !(1..=INTERVAL_LIMIT).contains(&interval) {
        return Err(EntryError::InvalidInterval(interval));
    }
    Ok(())
}

fn validate_recall(recall: Recall) -> Result<()> {
    if !recall.is_rating() {
        return Err(EntryError::InvalidRecall(recall.value()));
    }
    Ok(())
}

/// Builder for a new [`Entry`] with optional fields.
///
/// Fields are only validated in [`EntryBuilder::build`]; the title is
/// checked first, then the description, then the category.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    title: String,
    description: Option<String>,
    category: Option<String>,
}

impl EntryBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validate all fields and create the entry.
    pub fn build(self) -> Result<Entry> {
        self.build_at(Utc::now())
    }

    /// Like [`EntryBuilder::build`], with an explicit creation time.
    pub fn build_at(self, now: DateTime<Utc>) -> Result<Entry> {
        let title = self.title.trim();
        validate_title(title)?;

        let mut entry = Entry {
            id: 0,
            title: title.to_string(),
            description: String::new(),
            recall: Recall::NotReviewed,
            category: DEFAULT_CATEGORY.to_string(),
            interval: 1,
            review_date: now + Duration::days(1),
            last_review: None,
            created_at: now,
            updated_at: None,
        };

        if let Some(description) = self.description {
            let description = description.trim();
            validate_description(description)?;
            entry.description = description.to_string();
        }

        if let Some(category) = self.category {
            let category = category.trim();
            validate_category(category)?;
            entry.category = category.to_string();
        }

        Ok(entry)
    }
}

impl Entry {
    /// Create an entry with only a title; everything else takes defaults.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Self::builder(title).build()
    }

    pub fn builder(title: impl Into<String>) -> EntryBuilder {
        EntryBuilder::new(title)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recall(&self) -> Recall {
        self.recall
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Days until the next review.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn review_date(&self) -> DateTime<Utc> {
        self.review_date
    }

    /// When the recall was last rated, if ever.
    pub fn last_review(&self) -> Option<DateTime<Utc>> {
        self.last_review
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the entry was last mutated, if ever.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record the identifier assigned by storage.
    pub fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn update_title(&mut self, title: &str) -> Result<()> {
        self.update_title_at(title, Utc::now())
    }

    pub fn update_title_at(&mut self, title: &str, now: DateTime<Utc>) -> Result<()> {
        let title = title.trim();
        validate_title(title)?;

        self.title = title.to_string();
        self.updated_at = Some(now);
        tracing::debug!(entry_id = self.id, len = self.title.len(), "updated entry title");
        Ok(())
    }

    pub fn update_description(&mut self, description: &str) -> Result<()> {
        self.update_description_at(description, Utc::now())
    }

    pub fn update_description_at(&mut self, description: &str, now: DateTime<Utc>) -> Result<()> {
        let description = description.trim();
        validate_description(description)?;

        self.description = description.to_string();
        self.updated_at = Some(now);
        tracing::debug!(
            entry_id = self.id,
            len = self.description.len(),
            "updated entry description"
        );
        Ok(())
    }

    pub fn update_category(&mut self, category: &str) -> Result<()> {
        self.update_category_at(category, Utc::now())
    }

    pub fn update_category_at(&mut self, category: &str, now: DateTime<Utc>) -> Result<()> {
        let category = category.trim();
        validate_category(category)?;

        self.category = category.to_string();
        self.updated_at = Some(now);
        tracing::debug!(entry_id = self.id, len = self.category.len(), "updated entry category");
        Ok(())
    }

    /// Record a review rating. The interval is not recomputed until
    /// [`Entry::update_interval`] is called.
    pub fn update_recall(&mut self, recall: Recall) -> Result<()> {
        self.update_recall_at(recall, Utc::now())
    }

    pub fn update_recall_at(&mut self, recall: Recall, now: DateTime<Utc>) -> Result<()> {
        validate_recall(recall)?;

        self.recall = recall;
        self.updated_at = Some(now);
        self.last_review = Some(now);
        tracing::debug!(entry_id = self.id, recall = %recall, "recorded recall");
        Ok(())
    }

    /// Recompute the interval and review date from the current recall.
    ///
    /// Calling this twice without a new rating in between applies the
    /// multiplier twice. Returns the new interval.
    pub fn update_interval(&mut self) -> u32 {
        self.update_interval_at(Utc::now())
    }

    pub fn update_interval_at(&mut self, now: DateTime<Utc>) -> u32 {
        self.update_interval_with(&FixedMultiplier::default(), now)
    }

    /// Recompute the interval with a specific scheduler.
    pub fn update_interval_with(
        &mut self,
        scheduler: &dyn IntervalScheduler,
        now: DateTime<Utc>,
    ) -> u32 {
        let result = scheduler.schedule(self.interval, self.recall, now);

        self.interval = result.interval;
        self.review_date = result.review_date;
        self.updated_at = Some(now);
        tracing::debug!(
            entry_id = self.id,
            scheduler = scheduler.name(),
            interval = self.interval,
            review_date = %self.review_date,
            "rescheduled entry"
        );
        self.interval
    }
}
