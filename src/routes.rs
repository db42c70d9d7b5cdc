//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - HTML documentation page
//! - `GET  /book`                    - List the catalog (URLs only)
//! - `POST /book`                    - Create a book
//! - `GET  /book/{bookid}`           - Read one book
//! - `PUT  /book/{bookid}`           - Replace a book (upsert)
//! - `GET  /book/{bookid}/comment`   - List a book's comments
//! - `POST /book/{bookid}/comment`   - Append a comment
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_book_handler, create_comment_handler, get_book_handler, list_books_handler,
    list_comments_handler, put_book_handler, root_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/book", get(list_books_handler).post(create_book_handler))
        .route(
            "/book/{bookid}",
            get(get_book_handler).put(put_book_handler),
        )
        .route(
            "/book/{bookid}/comment",
            get(list_comments_handler).post(create_comment_handler),
        )
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
