use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use super::models::{Activity, ActivityKind, Flag, LearningCount, Word};
use super::store::{ActivityStore, StoreError, WordStore};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    english TEXT NOT NULL,
    japanese TEXT NOT NULL,
    is_correct TEXT NOT NULL DEFAULT 'FALSE',
    bookmark TEXT NOT NULL DEFAULT 'FALSE'
);
CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    type INTEGER NOT NULL,
    detail TEXT NOT NULL
);
";

/// SQLite-backed word and activity storage over a single connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn count(&self, sql: &str) -> Result<i64, StoreError> {
        Ok(self.conn.query_row(sql, [], |row| row.get(0))?)
    }

    fn select_words(&self, sql: &str) -> Result<Vec<Word>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut words = Vec::new();
        while let Some(row) = rows.next()? {
            words.push(parse_word_row(row)?);
        }
        Ok(words)
    }

    /// English term for a pkey, needed before mutations for the audit detail.
    fn english_for(&self, pkey: i64) -> Result<String, StoreError> {
        let mut stmt = self.conn.prepare("SELECT english FROM words WHERE id = ?1")?;
        let mut rows = stmt.query(params![pkey])?;
        match rows.next()? {
            Some(row) => Ok(row.get(0)?),
            None => Err(StoreError::NotFound(pkey)),
        }
    }
}

impl WordStore for SqliteStore {
    fn count_all(&self) -> Result<i64, StoreError> {
        self.count("SELECT COUNT(*) FROM words")
    }

    fn count_is_correct(&self) -> Result<i64, StoreError> {
        self.count("SELECT COUNT(*) FROM words WHERE is_correct = 'TRUE'")
    }

    fn count_bookmark(&self) -> Result<i64, StoreError> {
        self.count("SELECT COUNT(*) FROM words WHERE bookmark = 'TRUE'")
    }

    fn select_learning(&self) -> Result<Vec<Word>, StoreError> {
        self.select_words(
            "SELECT id, english, japanese, is_correct, bookmark
             FROM words WHERE is_correct = 'FALSE' ORDER BY id",
        )
    }

    fn select_incorrect(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT japanese FROM words ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut terms = Vec::new();
        while let Some(row) = rows.next()? {
            terms.push(row.get(0)?);
        }
        Ok(terms)
    }

    fn select_english_list(&self) -> Result<Vec<Word>, StoreError> {
        self.select_words(
            "SELECT id, english, japanese, is_correct, bookmark FROM words ORDER BY id",
        )
    }

    fn select_bookmark(&self) -> Result<Vec<Word>, StoreError> {
        self.select_words(
            "SELECT id, english, japanese, is_correct, bookmark
             FROM words WHERE bookmark = 'TRUE' ORDER BY id",
        )
    }

    fn update_is_correct_flag(&self, pkey: i64, flag: Flag) -> Result<String, StoreError> {
        let english = self.english_for(pkey)?;
        self.conn.execute(
            "UPDATE words SET is_correct = ?1 WHERE id = ?2",
            params![flag.as_str(), pkey],
        )?;
        Ok(english)
    }

    fn update_bookmark_flag(&self, pkey: i64, flag: Flag) -> Result<String, StoreError> {
        let english = self.english_for(pkey)?;
        self.conn.execute(
            "UPDATE words SET bookmark = ?1 WHERE id = ?2",
            params![flag.as_str(), pkey],
        )?;
        Ok(english)
    }

    fn insert(&self, english: &str, japanese: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO words (english, japanese) VALUES (?1, ?2)",
            params![english, japanese],
        )?;
        Ok(())
    }

    fn delete(&self, pkey: i64) -> Result<String, StoreError> {
        let english = self.english_for(pkey)?;
        self.conn.execute("DELETE FROM words WHERE id = ?1", params![pkey])?;
        Ok(english)
    }
}

impl ActivityStore for SqliteStore {
    fn select_activity_order_by_desc_limit_5(&self) -> Result<Vec<Activity>, StoreError> {
        self.select_activities(
            "SELECT date, type, detail FROM activities ORDER BY id DESC LIMIT 5",
        )
    }

    fn select_count_learning_date(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<Vec<LearningCount>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, COUNT(*) FROM activities
             WHERE type = ?1 AND date BETWEEN ?2 AND ?3
             GROUP BY date ORDER BY date",
        )?;
        let mut rows = stmt.query(params![
            ActivityKind::Mastered.code(),
            from_date.to_string(),
            to_date.to_string()
        ])?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next()? {
            counts.push(LearningCount { date: row.get(0)?, count: row.get(1)? });
        }
        Ok(counts)
    }

    fn select_all(&self) -> Result<Vec<Activity>, StoreError> {
        self.select_activities("SELECT date, type, detail FROM activities ORDER BY id DESC")
    }

    fn insert(&self, date: NaiveDate, kind: ActivityKind, detail: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO activities (date, type, detail) VALUES (?1, ?2, ?3)",
            params![date.to_string(), kind.code(), detail],
        )?;
        Ok(())
    }
}

impl SqliteStore {
    fn select_activities(&self, sql: &str) -> Result<Vec<Activity>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(Activity {
                date: row.get(0)?,
                kind: row.get(1)?,
                detail: row.get(2)?,
            });
        }
        Ok(activities)
    }
}

fn parse_word_row(row: &Row<'_>) -> Result<Word, StoreError> {
    let is_correct: String = row.get(3)?;
    let bookmark: String = row.get(4)?;
    Ok(Word {
        id: row.get(0)?,
        english: row.get(1)?,
        japanese: row.get(2)?,
        is_correct: Flag::parse(&is_correct)
            .ok_or_else(|| StoreError::InvalidRow(format!("is_correct = `{is_correct}`")))?,
        bookmark: Flag::parse(&bookmark)
            .ok_or_else(|| StoreError::InvalidRow(format!("bookmark = `{bookmark}`")))?,
    })
}
