//! Concrete repository implementations.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - PostgreSQL storage, one JSONB document per book
//! - [`MemoryBookRepository`] - in-process store for local development and tests

pub mod memory_book_repository;
pub mod pg_book_repository;

pub use memory_book_repository::MemoryBookRepository;
pub use pg_book_repository::PgBookRepository;
