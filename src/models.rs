use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Word {
    pub id: i64,
    pub japanese: String,
    pub romaji: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WordGroup {
    pub id: i64,
    pub word_id: i64,
    pub group_id: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudySession {
    pub id: i64,
    pub group_id: i64,
    pub study_activity_id: i64,
    #[serde(serialize_with = "serialize_naive_iso")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudyActivity {
    pub id: i64,
    pub study_session_id: i64,
    pub group_id: i64,
    #[serde(serialize_with = "serialize_naive_iso")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WordReviewItem {
    pub word_id: i64,
    pub study_session_id: i64,
    pub correct: bool,
    #[serde(serialize_with = "serialize_naive_iso")]
    pub created_at: NaiveDateTime,
}

/// SQLite stores DATETIME defaults as naive UTC; serialize as RFC 3339.
pub fn format_naive_iso(value: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(value, Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_naive_iso<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_naive_iso(*value))
}
