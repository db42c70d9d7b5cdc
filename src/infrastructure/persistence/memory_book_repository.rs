//! In-process implementation of the book repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Book repository backed by an in-process map.
///
/// Used when no `DATABASE_URL` is configured (local development) and by the
/// integration tests. A `BTreeMap` keeps `list_all` ordering identical to the
/// PostgreSQL implementation's `ORDER BY bookid`.
#[derive(Default)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<String, Book>>,
}

impl MemoryBookRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_id(&self, bookid: &str) -> Result<Option<Book>, AppError> {
        Ok(self.books.read().await.get(bookid).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn upsert(&self, book: &Book) -> Result<(), AppError> {
        self.books
            .write()
            .await
            .insert(book.bookid.clone(), book.clone());
        Ok(())
    }
}
