use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::response::{json_error, MessageResponse};
use crate::state::AppState;

use super::{parse_id, service_error};

#[derive(Debug, Deserialize)]
struct CreateStudySessionRequest {
    group_id: i64,
    study_activity_id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateStudySessionRequest {
    study_activity_id: i64,
}

#[derive(Debug, Deserialize)]
struct ReviewRequest {
    correct: bool,
}

pub async fn list_study_sessions(State(state): State<AppState>) -> Response {
    match state.service().list_study_sessions().await {
        Ok(sessions) => Json(sessions).into_response(),
        Err(err) => service_error(err, "list study sessions"),
    }
}

pub async fn get_study_session(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "study session") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().get_study_session(id).await {
        Ok(session) => Json(session).into_response(),
        Err(err) => service_error(err, "get study session"),
    }
}

pub async fn create_study_session(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: CreateStudySessionRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state
        .service()
        .create_study_session(payload.group_id, payload.study_activity_id)
        .await
    {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(err) => service_error(err, "create study session"),
    }
}

pub async fn update_study_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&id, "study session") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let payload: UpdateStudySessionRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state
        .service()
        .update_study_session(id, payload.study_activity_id)
        .await
    {
        Ok(session) => Json(session).into_response(),
        Err(err) => service_error(err, "update study session"),
    }
}

pub async fn delete_study_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "study session") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().delete_study_session(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => service_error(err, "delete study session"),
    }
}

pub async fn study_session_words(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "study session") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().study_session_words(id).await {
        Ok(words) => Json(words).into_response(),
        Err(err) => service_error(err, "study session words"),
    }
}

pub async fn review_word(
    State(state): State<AppState>,
    Path((id, word_id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let session_id = match parse_id(&id, "study session") {
        Ok(id) => id,
        Err(res) => return res,
    };
    let word_id = match parse_id(&word_id, "word") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let payload: ReviewRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state
        .service()
        .review_word(session_id, word_id, payload.correct)
        .await
    {
        Ok(()) => Json(MessageResponse {
            message: "review recorded",
        })
        .into_response(),
        Err(err) => service_error(err, "review word"),
    }
}
