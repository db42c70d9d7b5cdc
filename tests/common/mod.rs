#![allow(dead_code)]

use std::sync::Arc;

use bookshelf::domain::entities::{Book, Comment};
use bookshelf::domain::repositories::BookRepository;
use bookshelf::infrastructure::persistence::MemoryBookRepository;
use bookshelf::state::AppState;

/// Builds an [`AppState`] over a fresh in-memory store, returning the store
/// too so tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryBookRepository>) {
    let repo = Arc::new(MemoryBookRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub fn book(id: &str, title: &str) -> Book {
    Book {
        bookid: id.to_string(),
        title: title.to_string(),
        autors: vec!["Test Author".to_string()],
        description: "a test book".to_string(),
        image_url: format!("https://covers.example.com/{id}.jpg"),
        price: 10.0,
        comments: vec![],
    }
}

pub async fn seed_book(repo: &MemoryBookRepository, id: &str, title: &str) {
    repo.upsert(&book(id, title)).await.unwrap();
}

pub async fn seed_book_with_comment(repo: &MemoryBookRepository, id: &str, name: &str, text: &str) {
    let mut b = book(id, "commented");
    b.comments.push(Comment {
        bookid: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
    });
    repo.upsert(&b).await.unwrap();
}
