//! Book entity with its embedded comments.

use serde::{Deserialize, Serialize};

/// Placeholder used when a book is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "no description.";

/// A catalog entry.
///
/// `bookid` is the primary key and is immutable once set; it doubles as the
/// storage key, so the two can never diverge. Comments are embedded: they are
/// persisted and replaced together with their parent book.
///
/// The wire field `autors` keeps the historical spelling of the public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub bookid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub autors: Vec<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

/// A reader comment embedded in its owning [`Book`].
///
/// Comments have no identity or lifecycle of their own. `bookid` mirrors the
/// owner's key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub bookid: String,
    pub name: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_book() -> Book {
        Book {
            bookid: "b1".to_string(),
            title: "Dom Casmurro".to_string(),
            autors: vec!["Machado de Assis".to_string()],
            description: "A classic.".to_string(),
            image_url: "https://covers.example.com/b1.jpg".to_string(),
            price: 29.9,
            comments: vec![Comment {
                bookid: "b1".to_string(),
                name: "ana".to_string(),
                text: "ótimo livro".to_string(),
            }],
        }
    }

    #[test]
    fn test_book_serde_round_trip() {
        let book = sample_book();
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn test_book_wire_field_names() {
        let value = serde_json::to_value(sample_book()).unwrap();
        // `imageUrl` and `autors` are contractual spellings on the wire.
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("autors").is_some());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_description_defaults_to_placeholder() {
        let book: Book = serde_json::from_value(json!({ "bookid": "b2" })).unwrap();
        assert_eq!(book.description, DEFAULT_DESCRIPTION);
        assert!(book.title.is_empty());
        assert!(book.autors.is_empty());
        assert!(book.comments.is_empty());
    }
}
