use serde::{Deserialize, Serialize};

/// Two-valued flag domain shared by the mastery and bookmark columns.
/// The wire and storage form is the exact string "TRUE" or "FALSE";
/// any other spelling (including lowercase) is outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "TRUE")]
    True,
    #[serde(rename = "FALSE")]
    False,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::True => "TRUE",
            Flag::False => "FALSE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TRUE" => Some(Flag::True),
            "FALSE" => Some(Flag::False),
            _ => None,
        }
    }
}

/// Audit categories for the activity log. The integer codes are stable and
/// stored as-is; the display labels map each category onto the frontend view
/// that shows the affected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Mastered,
    Registered,
    Deleted,
    Bookmarked,
    Unbookmarked,
}

impl ActivityKind {
    pub fn code(self) -> i64 {
        match self {
            ActivityKind::Mastered => 0,
            ActivityKind::Registered => 1,
            ActivityKind::Deleted => 2,
            ActivityKind::Bookmarked => 3,
            ActivityKind::Unbookmarked => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ActivityKind::Mastered),
            1 => Some(ActivityKind::Registered),
            2 => Some(ActivityKind::Deleted),
            3 => Some(ActivityKind::Bookmarked),
            4 => Some(ActivityKind::Unbookmarked),
            _ => None,
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            ActivityKind::Mastered => "learning",
            ActivityKind::Registered => "english_list",
            ActivityKind::Deleted => "english_list",
            ActivityKind::Bookmarked => "bookmark",
            ActivityKind::Unbookmarked => "bookmark",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub japanese: String,
    pub is_correct: Flag,
    pub bookmark: Flag,
}

/// One append-only audit row. The date stays in its raw storage form
/// (ISO `YYYY-MM-DD` text) so a malformed row can survive until display
/// formatting, which tolerates it per-row.
#[derive(Debug, Clone)]
pub struct Activity {
    pub date: String,
    pub kind: i64,
    pub detail: String,
}

/// Daily count of mastered-word activity, for the dashboard's 7-day log.
#[derive(Debug, Clone)]
pub struct LearningCount {
    pub date: String,
    pub count: i64,
}
