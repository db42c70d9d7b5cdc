//! Application error type and its mapping to the JSON error envelope.
//!
//! Every failure surfaced to a client uses the same envelope:
//!
//! ```json
//! { "msg": "Book 'b1' not found", "error": 404, "datetime": "2026-08-30T12:00:00+00:00" }
//! ```
//!
//! The HTTP status and the `error` number in the body are deliberately
//! decoupled: missing books respond with HTTP 400 carrying `error: 404` in
//! the body. This mismatch is a contract inherited from the first deployment
//! of the API and kept for client compatibility.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// The wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub msg: String,
    pub error: u16,
    pub datetime: String,
}

/// Errors surfaced at the handler boundary.
///
/// None of these are retried and none are fatal to the process; each request
/// fails independently.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested book does not exist.
    #[error("Book '{0}' not found")]
    BookNotFound(String),

    /// The catalog has no books at all (distinct message, same family).
    #[error("No books found")]
    EmptyCatalog,

    /// A required field is absent from the request body.
    #[error("Required field '{0}' not found")]
    MissingField(&'static str),

    /// The body parsed as JSON but does not match the expected schema.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The body is not valid JSON at all.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// HTTP status paired with the envelope `error` number.
    ///
    /// Not-found conditions report 404 in the body but 400 on the wire; see
    /// the module docs.
    fn codes(&self) -> (StatusCode, u16) {
        match self {
            AppError::BookNotFound(_) | AppError::EmptyCatalog => (StatusCode::BAD_REQUEST, 404),
            AppError::MissingField(_) | AppError::InvalidBody(_) | AppError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, 400)
            }
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, 500),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.codes();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorEnvelope {
            msg: self.to_string(),
            error,
            datetime: Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}
