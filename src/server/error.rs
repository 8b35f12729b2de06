use super::types::ErrorResponse;
use crate::ai::AiErrorCode;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::any::Any;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your question";

/// An error response: status plus `{error, message?}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.into(),
                message,
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "validation_error",
            Some(message.into()),
        )
    }

    /// A bare `{error}` 400, used by the authorize route.
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, None)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_request",
            Some(message.into()),
        )
    }

    pub fn ai_failure(code: AiErrorCode, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            code.as_str(),
            Some(message.into()),
        )
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "authentication_failed",
            Some(message.into()),
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            Some(INTERNAL_ERROR_MESSAGE.to_string()),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Turns a handler panic into a sanitized 500. The payload is logged only.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!("Error processing request: {}", detail);
    ApiError::internal().into_response()
}
