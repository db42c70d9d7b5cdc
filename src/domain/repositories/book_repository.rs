//! Repository trait for book data access.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the book catalog.
///
/// Books are stored as whole documents keyed by `bookid`; comments travel
/// inside their parent document, so there are no comment-level operations.
/// Concurrent writes to the same key resolve as last write wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL (JSONB documents)
/// - [`crate::infrastructure::persistence::MemoryBookRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Looks up a book by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn find_by_id(&self, bookid: &str) -> Result<Option<Book>, AppError>;

    /// Returns every book in the catalog, ordered by `bookid`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn list_all(&self) -> Result<Vec<Book>, AppError>;

    /// Inserts or fully replaces the document stored under `book.bookid`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend errors.
    async fn upsert(&self, book: &Book) -> Result<(), AppError>;
}
