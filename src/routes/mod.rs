mod dashboard;
mod groups;
mod health;
mod reset;
mod study_activities;
mod study_sessions;
mod words;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::service::ServiceError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/dashboard/last-study-session",
            get(dashboard::last_study_session),
        )
        .route("/api/dashboard/study-progress", get(dashboard::study_progress))
        .route("/api/dashboard/quick-stats", get(dashboard::quick_stats))
        .route("/api/words", get(words::list_words).post(words::create_word))
        .route(
            "/api/words/:id",
            get(words::get_word)
                .put(words::update_word)
                .delete(words::delete_word),
        )
        .route(
            "/api/groups",
            get(groups::list_groups).post(groups::create_group),
        )
        .route(
            "/api/groups/:id",
            get(groups::get_group)
                .put(groups::update_group)
                .delete(groups::delete_group),
        )
        .route("/api/groups/:id/words", get(groups::group_words))
        .route(
            "/api/groups/:id/words/:word_id",
            post(groups::add_word_to_group),
        )
        .route(
            "/api/groups/:id/study_sessions",
            get(groups::group_study_sessions),
        )
        .route(
            "/api/study_sessions",
            get(study_sessions::list_study_sessions).post(study_sessions::create_study_session),
        )
        .route(
            "/api/study_sessions/:id",
            get(study_sessions::get_study_session)
                .put(study_sessions::update_study_session)
                .delete(study_sessions::delete_study_session),
        )
        .route(
            "/api/study_sessions/:id/words",
            get(study_sessions::study_session_words),
        )
        .route(
            "/api/study_sessions/:id/words/:word_id/review",
            post(study_sessions::review_word),
        )
        .route(
            "/api/study_activities",
            post(study_activities::create_study_activity),
        )
        .route(
            "/api/study_activities/:id",
            get(study_activities::get_study_activity),
        )
        .route(
            "/api/study_activities/:id/study_sessions",
            get(study_activities::study_activity_sessions),
        )
        .route("/api/reset_history", post(reset::reset_history))
        .route("/api/full_reset", post(reset::full_reset))
        .route("/health", get(health::root))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Parses a path segment as an entity id; garbage yields the JSON 400 body
/// instead of axum's default plain-text rejection.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, Response> {
    raw.parse::<i64>().map_err(|_| {
        json_error(StatusCode::BAD_REQUEST, format!("invalid {what} ID")).into_response()
    })
}

/// Maps a service failure onto the HTTP taxonomy: NotFound stays specific,
/// storage errors are logged with their operation and masked.
pub(crate) fn service_error(err: ServiceError, operation: &str) -> Response {
    match err {
        ServiceError::NotFound(entity) => {
            json_error(StatusCode::NOT_FOUND, format!("{entity} not found")).into_response()
        }
        ServiceError::Sqlx(err) => {
            tracing::warn!(error = %err, operation, "storage operation failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "route not found").into_response()
}
