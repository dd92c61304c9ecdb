use serde::Serialize;
use sqlx::Row;

use crate::models::format_naive_iso;

use super::{ServiceError, StudyService};

#[derive(Debug, Clone, Serialize)]
pub struct LastStudySession {
    pub id: i64,
    pub group_id: i64,
    pub created_at: String,
    pub study_activity_id: i64,
    pub group_name: String,
}

impl LastStudySession {
    /// "No data yet" is a valid answer, not an error.
    fn empty() -> Self {
        Self {
            id: 0,
            group_id: 0,
            created_at: String::new(),
            study_activity_id: 0,
            group_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyProgress {
    pub total_words_studied: i64,
    pub total_available_words: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub total_words: i64,
    pub total_groups: i64,
    pub words_mastered: i64,
    pub recent_accuracy: f64,
}

impl StudyService {
    pub async fn dashboard_last_study_session(&self) -> Result<LastStudySession, ServiceError> {
        let row = sqlx::query(
            r#"
            SELECT ss."id", ss."group_id", ss."created_at", ss."study_activity_id", g."name"
            FROM "study_sessions" ss
            JOIN "groups" g ON ss."group_id" = g."id"
            ORDER BY ss."created_at" DESC, ss."id" DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(LastStudySession::empty());
        };

        Ok(LastStudySession {
            id: row.try_get("id")?,
            group_id: row.try_get("group_id")?,
            created_at: format_naive_iso(row.try_get("created_at")?),
            study_activity_id: row.try_get("study_activity_id")?,
            group_name: row.try_get("name")?,
        })
    }

    pub async fn dashboard_study_progress(&self) -> Result<StudyProgress, ServiceError> {
        let total_words_studied: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(DISTINCT "word_id") FROM "word_review_items""#)
                .fetch_one(self.pool())
                .await?;

        let total_available_words: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
            .fetch_one(self.pool())
            .await?;

        Ok(StudyProgress {
            total_words_studied,
            total_available_words,
        })
    }

    pub async fn dashboard_quick_stats(&self) -> Result<QuickStats, ServiceError> {
        let total_words: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
            .fetch_one(self.pool())
            .await?;

        let total_groups: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "groups""#)
            .fetch_one(self.pool())
            .await?;

        // A word counts as mastered once it has accumulated enough correct
        // reviews; the threshold is configuration, not a stored column.
        let words_mastered: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM (
                SELECT "word_id"
                FROM "word_review_items"
                WHERE "correct"
                GROUP BY "word_id"
                HAVING COUNT(*) >= ?
            )
            "#,
        )
        .bind(self.mastery_threshold() as i64)
        .fetch_one(self.pool())
        .await?;

        let avg_correct: Option<f64> = sqlx::query_scalar(
            r#"SELECT AVG(CASE WHEN "correct" THEN 1.0 ELSE 0.0 END) FROM "word_review_items""#,
        )
        .fetch_one(self.pool())
        .await?;

        Ok(QuickStats {
            total_words,
            total_groups,
            words_mastered,
            recent_accuracy: avg_correct.unwrap_or(0.0) * 100.0,
        })
    }
}
