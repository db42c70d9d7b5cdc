//! Data Transfer Objects for API requests.
//!
//! Request bodies are parsed in two steps so the two failure modes stay
//! distinct: a body that is not JSON at all yields
//! [`AppError::MalformedBody`], while valid JSON missing a required key
//! yields [`AppError::InvalidBody`].

use crate::error::AppError;
use serde::de::DeserializeOwned;

pub mod book;
pub mod comment;

pub use book::{CreateBookRequest, ReplaceBookRequest};
pub use comment::{CommentBody, CreateCommentRequest};

/// Parses a raw request body into a typed DTO.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
}
