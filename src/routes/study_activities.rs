use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::response::json_error;
use crate::state::AppState;

use super::{parse_id, service_error};

#[derive(Debug, Deserialize)]
struct CreateStudyActivityRequest {
    study_session_id: i64,
    group_id: i64,
}

pub async fn get_study_activity(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "study activity") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().get_study_activity(id).await {
        Ok(activity) => Json(activity).into_response(),
        Err(err) => service_error(err, "get study activity"),
    }
}

pub async fn study_activity_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "study activity") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().get_study_activity_session(id).await {
        Ok(session) => Json(session).into_response(),
        Err(err) => service_error(err, "study activity sessions"),
    }
}

pub async fn create_study_activity(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: CreateStudyActivityRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state
        .service()
        .create_study_activity(payload.study_session_id, payload.group_id)
        .await
    {
        Ok(activity) => (StatusCode::CREATED, Json(activity)).into_response(),
        Err(err) => service_error(err, "create study activity"),
    }
}
