//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Book repository implementations (PostgreSQL, in-memory)

pub mod persistence;
