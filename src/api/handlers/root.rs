//! Root page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the API documentation page.
///
/// Renders `templates/doc.html`, a static page describing the endpoints.
#[derive(Template, WebTemplate)]
#[template(path = "doc.html")]
pub struct DocTemplate {}

/// Serves the HTML documentation page.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> impl IntoResponse {
    DocTemplate {}
}
