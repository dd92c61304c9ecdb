mod dashboard;
mod groups;
mod reset;
mod study;
mod words;

pub use dashboard::{LastStudySession, QuickStats, StudyProgress};

use thiserror::Error;

use crate::db::Db;

/// Business logic over the six-table schema. Constructed once at startup
/// and shared by every request handler; each method is its own short-lived
/// unit of work against the pool.
pub struct StudyService {
    db: Db,
    mastery_threshold: u32,
}

impl StudyService {
    pub fn new(db: Db, mastery_threshold: u32) -> Self {
        Self {
            db,
            mastery_threshold,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub(crate) fn pool(&self) -> &sqlx::SqlitePool {
        self.db.pool()
    }

    pub fn mastery_threshold(&self) -> u32 {
        self.mastery_threshold
    }
}

/// Distinguishes "the id does not exist" from a storage failure so the HTTP
/// layer can map them to 404 and 500 respectively.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}
