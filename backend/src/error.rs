//! Error handling for the Rolodex API.
//!
//! Every failure leaving a handler is an [`AppError`]; the response body is
//! always `{"error": "..."}` so the client can surface the message directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rolodex_shared::ErrorBody;
use thiserror::Error;

pub type ApiResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed validation (missing required field, malformed value).
    #[error("{0}")]
    BadRequest(String),

    /// The requested contact does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with existing data (duplicate phone number).
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found_contact(id: i32) -> Self {
        Self::NotFound(format!("Contact not found with ID: {}", id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
