//! Handlers for the book collection endpoints (list, create).

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::dto::{self, CreateBookRequest};
use crate::api::representation::{PrettyJson, book_url};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base_url;

/// Lists the catalog as an array of resource URLs.
///
/// # Endpoint
///
/// `GET /book`
///
/// # Response
///
/// Each entry carries only the `url` field, not the full representation:
///
/// ```json
/// [
///   { "url": "http://host/book/b1" },
///   { "url": "http://host/book/b2" }
/// ]
/// ```
///
/// # Errors
///
/// An empty catalog responds with HTTP 400 and an `error: 404` envelope —
/// the contract inherited from the first deployment (see [`crate::error`]).
pub async fn list_books_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<PrettyJson<Value>, AppError> {
    let books = state.repo.list_all().await?;

    if books.is_empty() {
        return Err(AppError::EmptyCatalog);
    }

    let base_url = request_base_url(&headers);
    let data: Vec<Value> = books
        .iter()
        .map(|book| json!({ "url": book_url(&base_url, &book.bookid) }))
        .collect();

    Ok(PrettyJson(Value::Array(data)))
}

/// Creates a book from the submitted document.
///
/// # Endpoint
///
/// `POST /book`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "b1",
///   "title": "Dom Casmurro",
///   "autors": ["Machado de Assis"],
///   "description": "a classic",
///   "imageUrl": "https://covers.example.com/b1.jpg",
///   "price": 29.9
/// }
/// ```
///
/// Only `id` is required; omitted fields take their defaults.
///
/// # Response
///
/// `201 Created` with the submitted fields plus the derived `url`, and a
/// `Location` header pointing at the new resource.
///
/// # Errors
///
/// Returns 400 with a missing-field envelope when `id` is absent, and 400
/// for bodies that are not valid JSON.
pub async fn create_book_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    let request: CreateBookRequest = dto::parse_body(&body)?;

    let Some(bookid) = request.id.clone() else {
        return Err(AppError::MissingField("id"));
    };

    let book = request.into_book(bookid.clone());
    state.repo.upsert(&book).await?;

    tracing::info!(bookid = %bookid, "book created");

    let base_url = request_base_url(&headers);
    let url = book_url(&base_url, &bookid);

    // The 201 body echoes what the client sent, with the resource URL added.
    let mut echoed: Value =
        serde_json::from_str(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;
    echoed["url"] = json!(url);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, url)],
        PrettyJson(echoed),
    )
        .into_response())
}
