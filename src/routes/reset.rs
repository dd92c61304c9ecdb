use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::MessageResponse;
use crate::state::AppState;

use super::service_error;

pub async fn reset_history(State(state): State<AppState>) -> Response {
    match state.service().reset_history().await {
        Ok(()) => Json(MessageResponse {
            message: "history reset successfully",
        })
        .into_response(),
        Err(err) => service_error(err, "reset history"),
    }
}

pub async fn full_reset(State(state): State<AppState>) -> Response {
    match state.service().full_reset().await {
        Ok(()) => Json(MessageResponse {
            message: "full reset performed successfully",
        })
        .into_response(),
        Err(err) => service_error(err, "full reset"),
    }
}
