//! DTOs for the comment endpoints.

use serde::Deserialize;

/// Body of `POST /book/{bookid}/comment`.
///
/// The owning book is identified by the path. The optional `id` field is
/// accepted as confirmation only; when present and different from the path
/// id the request is logged and the path still wins.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub id: Option<String>,
    pub comment: CommentBody,
}

/// The comment payload itself.
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub name: String,
    pub text: String,
}
