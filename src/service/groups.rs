use crate::models::{Group, StudySession, Word};

use super::{ServiceError, StudyService};

impl StudyService {
    pub async fn list_groups(&self) -> Result<Vec<Group>, ServiceError> {
        let groups =
            sqlx::query_as::<_, Group>(r#"SELECT "id", "name" FROM "groups" ORDER BY "id""#)
                .fetch_all(self.pool())
                .await?;
        Ok(groups)
    }

    pub async fn get_group(&self, id: i64) -> Result<Group, ServiceError> {
        sqlx::query_as::<_, Group>(r#"SELECT "id", "name" FROM "groups" WHERE "id" = ?"#)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(ServiceError::NotFound("group"))
    }

    pub async fn create_group(&self, name: &str) -> Result<Group, ServiceError> {
        let result = sqlx::query(r#"INSERT INTO "groups" ("name") VALUES (?)"#)
            .bind(name)
            .execute(self.pool())
            .await?;

        self.get_group(result.last_insert_rowid()).await
    }

    pub async fn update_group(&self, id: i64, name: &str) -> Result<Group, ServiceError> {
        let result = sqlx::query(r#"UPDATE "groups" SET "name" = ? WHERE "id" = ?"#)
            .bind(name)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("group"));
        }

        self.get_group(id).await
    }

    /// Word memberships cascade away with the group; study sessions and
    /// activities keep their group_id and stay behind as orphaned history.
    pub async fn delete_group(&self, id: i64) -> Result<(), ServiceError> {
        let result = sqlx::query(r#"DELETE FROM "groups" WHERE "id" = ?"#)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("group"));
        }

        Ok(())
    }

    /// Words belonging to a group via the word_groups junction table.
    pub async fn group_words(&self, group_id: i64) -> Result<Vec<Word>, ServiceError> {
        let words = sqlx::query_as::<_, Word>(
            r#"
            SELECT w."id", w."japanese", w."romaji", w."english", w."parts"
            FROM "words" w
            JOIN "word_groups" wg ON w."id" = wg."word_id"
            WHERE wg."group_id" = ?
            ORDER BY w."id"
            "#,
        )
        .bind(group_id)
        .fetch_all(self.pool())
        .await?;
        Ok(words)
    }

    pub async fn group_study_sessions(
        &self,
        group_id: i64,
    ) -> Result<Vec<StudySession>, ServiceError> {
        let sessions = sqlx::query_as::<_, StudySession>(
            r#"
            SELECT "id", "group_id", "study_activity_id", "created_at"
            FROM "study_sessions"
            WHERE "group_id" = ?
            ORDER BY "id"
            "#,
        )
        .bind(group_id)
        .fetch_all(self.pool())
        .await?;
        Ok(sessions)
    }

    /// Adds a word to a group, ignoring an already-existing membership.
    pub async fn add_word_to_group(&self, group_id: i64, word_id: i64) -> Result<(), ServiceError> {
        self.get_group(group_id).await?;
        self.get_word(word_id).await?;

        sqlx::query(
            r#"INSERT OR IGNORE INTO "word_groups" ("word_id", "group_id") VALUES (?, ?)"#,
        )
        .bind(word_id)
        .bind(group_id)
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
