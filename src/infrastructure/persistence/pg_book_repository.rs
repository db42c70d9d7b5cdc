//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository storing each book as one JSONB document.
///
/// The table is a thin key/document pair: `bookid` is the primary key and
/// `doc` holds the full serialized [`Book`], embedded comments included.
/// Upserts replace the whole document, giving last-write-wins semantics for
/// concurrent writers.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_by_id(&self, bookid: &str) -> Result<Option<Book>, AppError> {
        let row = sqlx::query("SELECT doc FROM books WHERE bookid = $1")
            .bind(bookid)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| {
            let doc: serde_json::Value = r.try_get("doc").map_err(AppError::from)?;
            serde_json::from_value(doc).map_err(AppError::from)
        })
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query("SELECT doc FROM books ORDER BY bookid")
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter()
            .map(|r| {
                let doc: serde_json::Value = r.try_get("doc").map_err(AppError::from)?;
                serde_json::from_value(doc).map_err(AppError::from)
            })
            .collect()
    }

    async fn upsert(&self, book: &Book) -> Result<(), AppError> {
        let doc = serde_json::to_value(book)?;

        sqlx::query(
            r#"
            INSERT INTO books (bookid, doc)
            VALUES ($1, $2)
            ON CONFLICT (bookid) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(&book.bookid)
        .bind(doc)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
