use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

use super::service_error;

pub async fn last_study_session(State(state): State<AppState>) -> Response {
    match state.service().dashboard_last_study_session().await {
        Ok(session) => Json(session).into_response(),
        Err(err) => service_error(err, "dashboard last study session"),
    }
}

pub async fn study_progress(State(state): State<AppState>) -> Response {
    match state.service().dashboard_study_progress().await {
        Ok(progress) => Json(progress).into_response(),
        Err(err) => service_error(err, "dashboard study progress"),
    }
}

pub async fn quick_stats(State(state): State<AppState>) -> Response {
    match state.service().dashboard_quick_stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => service_error(err, "dashboard quick stats"),
    }
}
