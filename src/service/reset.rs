use crate::db::seed;

use super::{ServiceError, StudyService};

impl StudyService {
    /// Clears review history only; vocabulary, groups and sessions stay.
    pub async fn reset_history(&self) -> Result<(), ServiceError> {
        sqlx::query(r#"DELETE FROM "word_review_items""#)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Wipes every table in dependency order, resets the autoincrement
    /// counters and reseeds, returning the system to the known-good
    /// default state.
    pub async fn full_reset(&self) -> Result<(), ServiceError> {
        seed::seed(self.pool()).await?;
        Ok(())
    }
}
