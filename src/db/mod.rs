pub mod models;
pub mod sqlite;
pub mod store;

pub use models::{Activity, ActivityKind, Flag, LearningCount, Word};
pub use sqlite::SqliteStore;
pub use store::{ActivityStore, StoreError, WordStore};

#[cfg(test)]
mod sqlite_tests;
