pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

use std::sync::Arc;

use crate::db::Db;
use crate::service::StudyService;
use crate::state::AppState;

/// Builds the router over an already-connected database. Migrations and
/// seeding are the caller's responsibility; `main` runs them leniently,
/// tests run them strictly.
pub fn create_app(db: Db, mastery_threshold: u32) -> axum::Router {
    let service = Arc::new(StudyService::new(db, mastery_threshold));
    routes::router(AppState::new(service))
}
