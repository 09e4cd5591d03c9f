use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Route-boundary error. Everything a handler can fail with becomes a
/// user-visible JSON message; nothing escapes as an unhandled panic.
#[derive(Error, Debug)]
pub enum AppError {
    /// Expected absence (no menu published today). Informational, not fatal.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Spreadsheet or language-model API failed. No automatic retry; the
    /// caller re-triggers the action.
    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn upstream(err: impl std::fmt::Display) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
