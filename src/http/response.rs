//! Error responses.
//!
//! Every failure leaves the service as `{"error": code, "message": text}`
//! with a 4xx status. Messages name the offending input only.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::filtering::FilterError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or missing fields.
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    /// A label outside its dimension.
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("no route for {0}")]
    NotFound(String),

    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,

    #[error("request took too long to complete")]
    Timeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Filter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::Filter(FilterError::UnknownLabel { .. }) => "unknown_label",
            ApiError::NotFound(_) => "not_found",
            ApiError::MethodNotAllowed { .. } => "method_not_allowed",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::Timeout => "request_timeout",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_error(self.status(), self.code(), self.message())
    }
}

/// Build a JSON error response.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
