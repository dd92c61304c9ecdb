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
struct GroupRequest {
    name: String,
}

pub async fn list_groups(State(state): State<AppState>) -> Response {
    match state.service().list_groups().await {
        Ok(groups) => Json(groups).into_response(),
        Err(err) => service_error(err, "list groups"),
    }
}

pub async fn get_group(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().get_group(id).await {
        Ok(group) => Json(group).into_response(),
        Err(err) => service_error(err, "get group"),
    }
}

pub async fn create_group(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: GroupRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    if payload.name.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "name is required").into_response();
    }

    match state.service().create_group(&payload.name).await {
        Ok(group) => (StatusCode::CREATED, Json(group)).into_response(),
        Err(err) => service_error(err, "create group"),
    }
}

pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let payload: GroupRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state.service().update_group(id, &payload.name).await {
        Ok(group) => Json(group).into_response(),
        Err(err) => service_error(err, "update group"),
    }
}

pub async fn delete_group(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().delete_group(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => service_error(err, "delete group"),
    }
}

pub async fn group_words(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().group_words(id).await {
        Ok(words) => Json(words).into_response(),
        Err(err) => service_error(err, "group words"),
    }
}

pub async fn add_word_to_group(
    State(state): State<AppState>,
    Path((id, word_id)): Path<(String, String)>,
) -> Response {
    let group_id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };
    let word_id = match parse_id(&word_id, "word") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().add_word_to_group(group_id, word_id).await {
        Ok(()) => Json(MessageResponse {
            message: "word added to group",
        })
        .into_response(),
        Err(err) => service_error(err, "add word to group"),
    }
}

pub async fn group_study_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "group") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().group_study_sessions(id).await {
        Ok(sessions) => Json(sessions).into_response(),
        Err(err) => service_error(err, "group study sessions"),
    }
}
