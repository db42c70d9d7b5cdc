//! Handlers for a book's comment collection (list, append).

use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::Value;

use crate::api::dto::{self, CreateCommentRequest};
use crate::api::representation::{PrettyJson, comments_representation};
use crate::domain::entities::Comment;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base_url;

/// Lists the comments embedded in one book.
///
/// # Endpoint
///
/// `GET /book/{bookid}/comment`
///
/// # Errors
///
/// An unknown book responds with HTTP 400 and an `error: 404` envelope.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(bookid): Path<String>,
    headers: HeaderMap,
) -> Result<PrettyJson<Value>, AppError> {
    let book = state
        .repo
        .find_by_id(&bookid)
        .await?
        .ok_or(AppError::BookNotFound(bookid))?;

    let base_url = request_base_url(&headers);
    Ok(PrettyJson(comments_representation(&book, &base_url)))
}

/// Appends one comment to a book and returns the updated collection.
///
/// # Endpoint
///
/// `POST /book/{bookid}/comment`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "b1",
///   "comment": { "name": "ana", "text": "great read" }
/// }
/// ```
///
/// The owning book comes from the path. A body `id` is accepted as
/// confirmation only; a mismatch is logged and ignored.
///
/// # Errors
///
/// An unknown book responds with HTTP 400 and an `error: 404` envelope —
/// never an unguarded failure.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Path(bookid): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<PrettyJson<Value>, AppError> {
    let request: CreateCommentRequest = dto::parse_body(&body)?;

    if let Some(body_id) = &request.id
        && body_id != &bookid
    {
        tracing::warn!(path_id = %bookid, body_id = %body_id, "comment body id ignored");
    }

    let mut book = state
        .repo
        .find_by_id(&bookid)
        .await?
        .ok_or(AppError::BookNotFound(bookid))?;

    book.comments.push(Comment {
        bookid: book.bookid.clone(),
        name: request.comment.name,
        text: request.comment.text,
    });

    state.repo.upsert(&book).await?;

    tracing::info!(bookid = %book.bookid, total = book.comments.len(), "comment appended");

    let base_url = request_base_url(&headers);
    Ok(PrettyJson(comments_representation(&book, &base_url)))
}
