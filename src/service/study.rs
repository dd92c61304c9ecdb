use crate::models::{StudyActivity, StudySession, Word};

use super::{ServiceError, StudyService};

impl StudyService {
    pub async fn list_study_sessions(&self) -> Result<Vec<StudySession>, ServiceError> {
        let sessions = sqlx::query_as::<_, StudySession>(
            r#"
            SELECT "id", "group_id", "study_activity_id", "created_at"
            FROM "study_sessions"
            ORDER BY "id"
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(sessions)
    }

    pub async fn get_study_session(&self, id: i64) -> Result<StudySession, ServiceError> {
        sqlx::query_as::<_, StudySession>(
            r#"
            SELECT "id", "group_id", "study_activity_id", "created_at"
            FROM "study_sessions"
            WHERE "id" = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(ServiceError::NotFound("study session"))
    }

    /// Neither id is checked against its table: sessions couple loosely to
    /// groups and activities, and an activity row may be created after its
    /// session (see the seed routine).
    pub async fn create_study_session(
        &self,
        group_id: i64,
        study_activity_id: i64,
    ) -> Result<StudySession, ServiceError> {
        let result = sqlx::query(
            r#"
            INSERT INTO "study_sessions" ("group_id", "study_activity_id", "created_at")
            VALUES (?, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(group_id)
        .bind(study_activity_id)
        .execute(self.pool())
        .await?;

        self.get_study_session(result.last_insert_rowid()).await
    }

    pub async fn update_study_session(
        &self,
        id: i64,
        study_activity_id: i64,
    ) -> Result<StudySession, ServiceError> {
        let result =
            sqlx::query(r#"UPDATE "study_sessions" SET "study_activity_id" = ? WHERE "id" = ?"#)
                .bind(study_activity_id)
                .bind(id)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("study session"));
        }

        self.get_study_session(id).await
    }

    pub async fn delete_study_session(&self, id: i64) -> Result<(), ServiceError> {
        let result = sqlx::query(r#"DELETE FROM "study_sessions" WHERE "id" = ?"#)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("study session"));
        }

        Ok(())
    }

    /// Words that have a recorded review outcome in the session.
    pub async fn study_session_words(&self, session_id: i64) -> Result<Vec<Word>, ServiceError> {
        let words = sqlx::query_as::<_, Word>(
            r#"
            SELECT w."id", w."japanese", w."romaji", w."english", w."parts"
            FROM "words" w
            JOIN "word_review_items" wr ON w."id" = wr."word_id"
            WHERE wr."study_session_id" = ?
            ORDER BY w."id"
            "#,
        )
        .bind(session_id)
        .fetch_all(self.pool())
        .await?;
        Ok(words)
    }

    /// Records a review outcome. Re-reviewing the same word in the same
    /// session replaces the previous outcome instead of tripping the
    /// (word_id, study_session_id) primary key.
    pub async fn review_word(
        &self,
        session_id: i64,
        word_id: i64,
        correct: bool,
    ) -> Result<(), ServiceError> {
        self.get_study_session(session_id).await?;
        self.get_word(word_id).await?;

        sqlx::query(
            r#"
            INSERT INTO "word_review_items" ("word_id", "study_session_id", "correct", "created_at")
            VALUES (?, ?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT ("word_id", "study_session_id")
            DO UPDATE SET "correct" = excluded."correct", "created_at" = excluded."created_at"
            "#,
        )
        .bind(word_id)
        .bind(session_id)
        .bind(correct)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_study_activity(&self, id: i64) -> Result<StudyActivity, ServiceError> {
        sqlx::query_as::<_, StudyActivity>(
            r#"
            SELECT "id", "study_session_id", "group_id", "created_at"
            FROM "study_activities"
            WHERE "id" = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(ServiceError::NotFound("study activity"))
    }

    /// The session an activity back-references.
    pub async fn get_study_activity_session(
        &self,
        activity_id: i64,
    ) -> Result<StudySession, ServiceError> {
        let activity = self.get_study_activity(activity_id).await?;
        self.get_study_session(activity.study_session_id).await
    }

    pub async fn create_study_activity(
        &self,
        study_session_id: i64,
        group_id: i64,
    ) -> Result<StudyActivity, ServiceError> {
        let result = sqlx::query(
            r#"INSERT INTO "study_activities" ("study_session_id", "group_id") VALUES (?, ?)"#,
        )
        .bind(study_session_id)
        .bind(group_id)
        .execute(self.pool())
        .await?;

        self.get_study_activity(result.last_insert_rowid()).await
    }
}
