//! Handlers for single-book endpoints (read, replace).

use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::Value;

use crate::api::dto::{self, ReplaceBookRequest};
use crate::api::representation::{PrettyJson, book_representation};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base_url;

/// Returns the full representation of one book.
///
/// # Endpoint
///
/// `GET /book/{bookid}`
///
/// # Response
///
/// All entity fields plus a `url` derived from the request's `Host` header.
///
/// # Errors
///
/// An unknown id responds with HTTP 400 and an `error: 404` envelope naming
/// the id.
pub async fn get_book_handler(
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
    Ok(PrettyJson(book_representation(&book, &base_url)))
}

/// Fully replaces a book, creating it when absent (upsert).
///
/// # Endpoint
///
/// `PUT /book/{bookid}`
///
/// # Request Body
///
/// Every field is required; a missing key fails the request:
///
/// ```json
/// {
///   "title": "Dom Casmurro",
///   "autors": ["Machado de Assis"],
///   "description": "a classic",
///   "imageUrl": "https://covers.example.com/b1.jpg",
///   "price": 29.9
/// }
/// ```
///
/// The comment collection is never part of a PUT; comments already stored
/// under this id survive the replacement.
///
/// # Response
///
/// `200 OK` with the full representation. Unlike GET, the `url` here has no
/// host prefix (`/book/{id}`) — a long-standing inconsistency kept for
/// client compatibility.
///
/// # Errors
///
/// Returns 400 with a field-error envelope when a required key is absent.
pub async fn put_book_handler(
    State(state): State<AppState>,
    Path(bookid): Path<String>,
    body: String,
) -> Result<PrettyJson<Value>, AppError> {
    let request: ReplaceBookRequest = dto::parse_body(&body)?;

    let existing = state.repo.find_by_id(&bookid).await?;
    let created = existing.is_none();

    let book = request.into_book(bookid, existing);
    state.repo.upsert(&book).await?;

    tracing::info!(bookid = %book.bookid, created, "book replaced");

    Ok(PrettyJson(book_representation(&book, "")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBookRepository;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_surfaces_storage_failure_as_500() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::Storage("backend down".to_string())));

        let state = AppState::new(Arc::new(repo));
        let result = get_book_handler(
            State(state),
            Path("b1".to_string()),
            HeaderMap::new(),
        )
        .await;

        let response = result.unwrap_err().into_response();
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
