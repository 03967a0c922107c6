use chrono::NaiveDate;
use thiserror::Error;

use super::models::{Activity, ActivityKind, Flag, LearningCount, Word};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("word not found: pkey={0}")]
    NotFound(i64),

    #[error("invalid stored row: {0}")]
    InvalidRow(String),
}

/// Word persistence as the request layer consumes it. Mutations that need an
/// audit detail resolve and return the affected English term.
pub trait WordStore {
    fn count_all(&self) -> Result<i64, StoreError>;
    fn count_is_correct(&self) -> Result<i64, StoreError>;
    fn count_bookmark(&self) -> Result<i64, StoreError>;

    /// Words still to be learned, i.e. mastery flag FALSE.
    fn select_learning(&self) -> Result<Vec<Word>, StoreError>;
    /// Every stored Japanese term, the wrong-answer pool for the quiz.
    fn select_incorrect(&self) -> Result<Vec<String>, StoreError>;
    fn select_english_list(&self) -> Result<Vec<Word>, StoreError>;
    fn select_bookmark(&self) -> Result<Vec<Word>, StoreError>;

    fn update_is_correct_flag(&self, pkey: i64, flag: Flag) -> Result<String, StoreError>;
    fn update_bookmark_flag(&self, pkey: i64, flag: Flag) -> Result<String, StoreError>;
    fn insert(&self, english: &str, japanese: &str) -> Result<(), StoreError>;
    /// Removes the word and returns its English term, resolved before deletion.
    fn delete(&self, pkey: i64) -> Result<String, StoreError>;
}

/// Append-only activity log.
pub trait ActivityStore {
    fn select_activity_order_by_desc_limit_5(&self) -> Result<Vec<Activity>, StoreError>;
    fn select_count_learning_date(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<Vec<LearningCount>, StoreError>;
    fn select_all(&self) -> Result<Vec<Activity>, StoreError>;
    fn insert(&self, date: NaiveDate, kind: ActivityKind, detail: &str) -> Result<(), StoreError>;
}
