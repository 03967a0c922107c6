use chrono::{Days, NaiveDate};
use log::info;
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;
use super::quiz::build_quiz;
use super::response::Response;
use super::validate::Validator;
use crate::db::{Activity, ActivityKind, ActivityStore, Flag, WordStore};

const DATE_DISPLAY_FORMAT: &str = "%Y/%m/%d";
const DASHBOARD_PLACEHOLDER: &str = "{dashboardData}";

// Display converters. Both return None for values outside their domain; the
// list views keep the raw value for that row and move on.

fn display_activity_kind(code: i64) -> Option<&'static str> {
    ActivityKind::from_code(code).map(ActivityKind::display)
}

fn display_date(raw: &str) -> Option<String> {
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
}

#[derive(Serialize)]
struct UpdateMessage {
    msg: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WordCounts {
    word_total: i64,
    is_correct_total: i64,
    bookmark_total: i64,
}

#[derive(Serialize)]
struct RecentActivity {
    #[serde(rename = "type")]
    kind: Value,
    detail: String,
}

#[derive(Serialize)]
struct LearningLogEntry {
    count: i64,
    date: String,
}

#[derive(Serialize)]
struct DashboardData {
    count: WordCounts,
    activitys: Vec<RecentActivity>,
    #[serde(rename = "learningLog")]
    learning_log: Vec<LearningLogEntry>,
}

/// Dashboard page: word counts, the five most recent activities and the
/// 7-day learning log, embedded as one JSON blob into the HTML shell.
pub struct DashboardView<'a> {
    words: &'a dyn WordStore,
    activities: &'a dyn ActivityStore,
    template: &'a str,
    today: NaiveDate,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        words: &'a dyn WordStore,
        activities: &'a dyn ActivityStore,
        template: &'a str,
        today: NaiveDate,
    ) -> Self {
        Self { words, activities, template, today }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let data = DashboardData {
            count: self.count_num()?,
            activitys: self.recent_activities()?,
            learning_log: self.learning_log()?,
        };
        if !self.template.contains(DASHBOARD_PLACEHOLDER) {
            return Err(ApiError::Template("dashboardData"));
        }
        let blob = serde_json::to_string(&data)?;
        Ok(Response::html(self.template.replace(DASHBOARD_PLACEHOLDER, &blob)))
    }

    fn count_num(&self) -> Result<WordCounts, ApiError> {
        Ok(WordCounts {
            word_total: self.words.count_all()?,
            is_correct_total: self.words.count_is_correct()?,
            bookmark_total: self.words.count_bookmark()?,
        })
    }

    fn recent_activities(&self) -> Result<Vec<RecentActivity>, ApiError> {
        let rows = self.activities.select_activity_order_by_desc_limit_5()?;
        Ok(rows
            .into_iter()
            .map(|row| RecentActivity {
                kind: match display_activity_kind(row.kind) {
                    Some(label) => Value::from(label),
                    None => Value::from(row.kind),
                },
                detail: row.detail,
            })
            .collect())
    }

    fn learning_log(&self) -> Result<Vec<LearningLogEntry>, ApiError> {
        let from_date = self.today - Days::new(7);
        let rows = self.activities.select_count_learning_date(from_date, self.today)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let date = display_date(&row.date).unwrap_or(row.date);
                LearningLogEntry { count: row.count, date }
            })
            .collect())
    }
}

/// Quiz view: every unmastered word as a multiple-choice item.
pub struct LearningView<'a> {
    words: &'a dyn WordStore,
}

impl<'a> LearningView<'a> {
    pub fn new(words: &'a dyn WordStore) -> Self {
        Self { words }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let corrects = self.words.select_learning()?;
        let pool = self.words.select_incorrect()?;
        let items = build_quiz(&corrects, &pool, &mut rand::rng());
        Response::json(&items)
    }
}

#[derive(Serialize)]
struct EnglishListRow {
    id: i64,
    english: String,
    japanese: String,
    is_correct: Flag,
}

/// Word list view.
pub struct EnglishListView<'a> {
    words: &'a dyn WordStore,
}

impl<'a> EnglishListView<'a> {
    pub fn new(words: &'a dyn WordStore) -> Self {
        Self { words }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let rows: Vec<EnglishListRow> = self
            .words
            .select_english_list()?
            .into_iter()
            .map(|word| EnglishListRow {
                id: word.id,
                english: word.english,
                japanese: word.japanese,
                is_correct: word.is_correct,
            })
            .collect();
        Response::json(&rows)
    }
}

#[derive(Serialize)]
struct BookmarkRow {
    id: i64,
    english: String,
    japanese: String,
}

/// Bookmarked-words view.
pub struct BookmarkView<'a> {
    words: &'a dyn WordStore,
}

impl<'a> BookmarkView<'a> {
    pub fn new(words: &'a dyn WordStore) -> Self {
        Self { words }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let rows: Vec<BookmarkRow> = self
            .words
            .select_bookmark()?
            .into_iter()
            .map(|word| BookmarkRow {
                id: word.id,
                english: word.english,
                japanese: word.japanese,
            })
            .collect();
        Response::json(&rows)
    }
}

#[derive(Serialize)]
struct ActivityRow {
    date: String,
    type_flag: Value,
    detail: String,
}

/// Full activity-log view, newest first.
pub struct ActivityView<'a> {
    activities: &'a dyn ActivityStore,
}

impl<'a> ActivityView<'a> {
    pub fn new(activities: &'a dyn ActivityStore) -> Self {
        Self { activities }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let rows: Vec<ActivityRow> = self
            .activities
            .select_all()?
            .into_iter()
            .map(display_activity_row)
            .collect();
        Response::json(&rows)
    }
}

fn display_activity_row(row: Activity) -> ActivityRow {
    let type_flag = match display_activity_kind(row.kind) {
        Some(label) => Value::from(label),
        None => Value::from(row.kind),
    };
    let date = display_date(&row.date).unwrap_or(row.date);
    ActivityRow { date, type_flag, detail: row.detail }
}

/// Mastery-flag update. Validation runs first; the mutation, the audit record
/// and the response message only happen once the payload checks out.
pub struct UpdateIsCorrectFlagView<'a> {
    req_data: &'a str,
    words: &'a dyn WordStore,
    activities: &'a dyn ActivityStore,
    today: NaiveDate,
}

impl<'a> UpdateIsCorrectFlagView<'a> {
    pub fn new(
        req_data: &'a str,
        words: &'a dyn WordStore,
        activities: &'a dyn ActivityStore,
        today: NaiveDate,
    ) -> Self {
        Self { req_data, words, activities, today }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let cleaned = Validator::new(self.req_data)?.pkey_flag()?;
        let eng_val = self.words.update_is_correct_flag(cleaned.pkey, cleaned.flag)?;

        let state = if cleaned.flag == Flag::True { "習得" } else { "未習得に変更" };
        let detail = format!("{eng_val}を{state}しました");
        self.activities.insert(self.today, ActivityKind::Mastered, &detail)?;
        info!("{detail}");

        Response::json(&UpdateMessage { msg: detail })
    }
}

/// Bookmark-flag update.
pub struct UpdateBookmarkFlagView<'a> {
    req_data: &'a str,
    words: &'a dyn WordStore,
    activities: &'a dyn ActivityStore,
    today: NaiveDate,
}

impl<'a> UpdateBookmarkFlagView<'a> {
    pub fn new(
        req_data: &'a str,
        words: &'a dyn WordStore,
        activities: &'a dyn ActivityStore,
        today: NaiveDate,
    ) -> Self {
        Self { req_data, words, activities, today }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let cleaned = Validator::new(self.req_data)?.pkey_flag()?;
        let eng_val = self.words.update_bookmark_flag(cleaned.pkey, cleaned.flag)?;

        let state =
            if cleaned.flag == Flag::True { "ブックマーク登録" } else { "ブックマーク解除" };
        let detail = format!("{eng_val}を{state}しました");
        self.activities.insert(self.today, ActivityKind::Bookmarked, &detail)?;
        info!("{detail}");

        Response::json(&UpdateMessage { msg: detail })
    }
}

/// Word registration.
pub struct RegisterWordView<'a> {
    req_data: &'a str,
    words: &'a dyn WordStore,
    activities: &'a dyn ActivityStore,
    today: NaiveDate,
}

impl<'a> RegisterWordView<'a> {
    pub fn new(
        req_data: &'a str,
        words: &'a dyn WordStore,
        activities: &'a dyn ActivityStore,
        today: NaiveDate,
    ) -> Self {
        Self { req_data, words, activities, today }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let cleaned = Validator::new(self.req_data)?.register()?;
        self.words.insert(&cleaned.eng_val, &cleaned.jap_val)?;

        let detail =
            format!("英語: {} 日本語: {} を登録しました", cleaned.eng_val, cleaned.jap_val);
        self.activities.insert(self.today, ActivityKind::Registered, &detail)?;
        info!("{detail}");

        Response::json(&UpdateMessage { msg: detail })
    }
}

/// Word deletion. The English term is resolved from the pkey before the row
/// goes away, since the audit message needs it.
pub struct DeleteWordView<'a> {
    req_data: &'a str,
    words: &'a dyn WordStore,
    activities: &'a dyn ActivityStore,
    today: NaiveDate,
}

impl<'a> DeleteWordView<'a> {
    pub fn new(
        req_data: &'a str,
        words: &'a dyn WordStore,
        activities: &'a dyn ActivityStore,
        today: NaiveDate,
    ) -> Self {
        Self { req_data, words, activities, today }
    }

    pub fn view(&self) -> Result<Response, ApiError> {
        let cleaned = Validator::new(self.req_data)?.pkey_only()?;
        let eng_val = self.words.delete(cleaned.pkey)?;

        let detail = format!("{eng_val}を削除しました");
        self.activities.insert(self.today, ActivityKind::Deleted, &detail)?;
        info!("{detail}");

        Response::json(&UpdateMessage { msg: detail })
    }
}
