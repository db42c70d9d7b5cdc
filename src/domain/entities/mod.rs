//! Core domain entities representing the catalog data model.
//!
//! Entities are plain serde data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Book`] - A catalog entry, keyed by `bookid`
//! - [`Comment`] - A reader comment embedded inside its owning book
//!
//! Comments are denormalized into the book document: they are created, read,
//! and persisted only as part of their parent.

pub mod book;

pub use book::{Book, Comment, DEFAULT_DESCRIPTION};
