//! Request base URL derivation from HTTP headers.

use axum::http::{HeaderMap, header};

/// Derives the base URL for resource links from the request's `Host` header.
///
/// Returns `http://{host}` (port included, if the client sent one). When the
/// header is missing or not valid UTF-8 the base is empty, which degrades to
/// host-less paths such as `/book/{id}` rather than failing the request.
pub fn request_base_url(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_default()
}
