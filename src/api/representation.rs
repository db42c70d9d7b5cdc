//! JSON representations of catalog resources.
//!
//! A representation is the entity's fields plus a derived `url` field pointing
//! back at the resource. Representations are plain [`serde_json::Value`]s;
//! building them cannot fail.
//!
//! Responses are rendered through [`PrettyJson`]: 2-space-indented JSON with
//! non-ASCII characters preserved literally, always UTF-8.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::{Book, Comment};
use crate::error::AppError;

/// Full representation of a book: every field plus `url`.
pub fn book_representation(book: &Book, base_url: &str) -> Value {
    json!({
        "bookid": book.bookid,
        "title": book.title,
        "autors": book.autors,
        "description": book.description,
        "imageUrl": book.image_url,
        "price": book.price,
        "comments": book.comments,
        "url": book_url(base_url, &book.bookid),
    })
}

/// Representation of a single embedded comment.
///
/// Comments are not individually addressable; the `url` points at the
/// owning book's comment collection.
pub fn comment_representation(comment: &Comment, base_url: &str) -> Value {
    json!({
        "bookid": comment.bookid,
        "name": comment.name,
        "text": comment.text,
        "url": format!("{base_url}/book/{}/comment", comment.bookid),
    })
}

/// Representation of a book's whole comment collection.
pub fn comments_representation(book: &Book, base_url: &str) -> Value {
    Value::Array(
        book.comments
            .iter()
            .map(|c| comment_representation(c, base_url))
            .collect(),
    )
}

/// Resource URL for a book.
pub fn book_url(base_url: &str, bookid: &str) -> String {
    format!("{base_url}/book/{bookid}")
}

/// Response wrapper producing pretty-printed JSON.
///
/// [`serde_json::to_string_pretty`] emits 2-space indentation and leaves
/// non-ASCII characters unescaped, matching the API's historical output.
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => AppError::Storage(e.to_string()).into_response(),
        }
    }
}
