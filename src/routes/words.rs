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
struct CreateWordRequest {
    japanese: String,
    romaji: String,
    english: String,
    #[serde(default)]
    parts: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct UpdateWordRequest {
    english: String,
}

pub async fn list_words(State(state): State<AppState>) -> Response {
    match state.service().list_words().await {
        Ok(words) => Json(words).into_response(),
        Err(err) => service_error(err, "list words"),
    }
}

pub async fn get_word(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "word") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().get_word(id).await {
        Ok(word) => Json(word).into_response(),
        Err(err) => service_error(err, "get word"),
    }
}

pub async fn create_word(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: CreateWordRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    if payload.japanese.trim().is_empty() || payload.romaji.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "japanese and romaji are required")
            .into_response();
    }

    // `parts` arrives as arbitrary structured data and is stored serialized.
    let parts = payload
        .parts
        .as_ref()
        .filter(|value| !value.is_null())
        .map(|value| value.to_string());

    match state
        .service()
        .create_word(
            &payload.japanese,
            &payload.romaji,
            &payload.english,
            parts.as_deref(),
        )
        .await
    {
        Ok(word) => (StatusCode::CREATED, Json(word)).into_response(),
        Err(err) => service_error(err, "create word"),
    }
}

pub async fn update_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&id, "word") {
        Ok(id) => id,
        Err(res) => return res,
    };

    let payload: UpdateWordRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => {
            return json_error(StatusCode::BAD_REQUEST, "invalid request payload").into_response();
        }
    };

    match state.service().update_word(id, &payload.english).await {
        Ok(word) => Json(word).into_response(),
        Err(err) => service_error(err, "update word"),
    }
}

pub async fn delete_word(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "word") {
        Ok(id) => id,
        Err(res) => return res,
    };

    match state.service().delete_word(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => service_error(err, "delete word"),
    }
}
