use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct AppError {
    status: StatusCode,
    message: String,
    is_operational: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Non-operational errors carry storage detail; clients get a generic
        // message and the detail stays in the logs.
        let message = if self.is_operational {
            self.message
        } else {
            "internal server error".to_string()
        };

        (self.status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> AppError {
    AppError {
        status,
        message: message.into(),
        is_operational: status != StatusCode::INTERNAL_SERVER_ERROR,
    }
}
