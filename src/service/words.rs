use crate::models::Word;

use super::{ServiceError, StudyService};

impl StudyService {
    pub async fn list_words(&self) -> Result<Vec<Word>, ServiceError> {
        let words = sqlx::query_as::<_, Word>(
            r#"SELECT "id", "japanese", "romaji", "english", "parts" FROM "words" ORDER BY "id""#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(words)
    }

    pub async fn get_word(&self, id: i64) -> Result<Word, ServiceError> {
        sqlx::query_as::<_, Word>(
            r#"SELECT "id", "japanese", "romaji", "english", "parts" FROM "words" WHERE "id" = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(ServiceError::NotFound("word"))
    }

    pub async fn create_word(
        &self,
        japanese: &str,
        romaji: &str,
        english: &str,
        parts: Option<&str>,
    ) -> Result<Word, ServiceError> {
        let result = sqlx::query(
            r#"INSERT INTO "words" ("japanese", "romaji", "english", "parts") VALUES (?, ?, ?, ?)"#,
        )
        .bind(japanese)
        .bind(romaji)
        .bind(english)
        .bind(parts)
        .execute(self.pool())
        .await?;

        self.get_word(result.last_insert_rowid()).await
    }

    pub async fn update_word(&self, id: i64, english: &str) -> Result<Word, ServiceError> {
        let result = sqlx::query(r#"UPDATE "words" SET "english" = ? WHERE "id" = ?"#)
            .bind(english)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("word"));
        }

        self.get_word(id).await
    }

    /// Memberships and review items referencing the word go with it
    /// (ON DELETE CASCADE).
    pub async fn delete_word(&self, id: i64) -> Result<(), ServiceError> {
        let result = sqlx::query(r#"DELETE FROM "words" WHERE "id" = ?"#)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("word"));
        }

        Ok(())
    }
}
