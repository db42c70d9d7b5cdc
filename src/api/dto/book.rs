//! DTOs for the book endpoints.

use serde::Deserialize;

use crate::domain::entities::{Book, DEFAULT_DESCRIPTION};

/// Body of `POST /book`.
///
/// Only `id` is required (checked by the handler so the failure carries the
/// contractual missing-field message). Every other field falls back to the
/// entity defaults.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub autors: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub price: Option<f64>,
}

impl CreateBookRequest {
    /// Builds the new book entity. `bookid` is taken from the already
    /// validated `id` field; the comment collection starts empty.
    pub fn into_book(self, bookid: String) -> Book {
        Book {
            bookid,
            title: self.title.unwrap_or_default(),
            autors: self.autors.unwrap_or_default(),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image_url: self.image_url.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            comments: Vec::new(),
        }
    }
}

/// Body of `PUT /book/{bookid}`.
///
/// A full replacement: every field is required, and a missing key fails the
/// request instead of defaulting.
#[derive(Debug, Deserialize)]
pub struct ReplaceBookRequest {
    pub title: String,
    pub autors: Vec<String>,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub price: f64,
}

impl ReplaceBookRequest {
    /// Builds the replacement entity, carrying over the comments already
    /// stored under this id (PUT never touches the comment collection).
    pub fn into_book(self, bookid: String, existing: Option<Book>) -> Book {
        let comments = existing.map(|b| b.comments).unwrap_or_default();
        Book {
            bookid,
            title: self.title,
            autors: self.autors,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            comments,
        }
    }
}
