//! Domain layer containing the catalog data model.
//!
//! Defines entities and repository interfaces independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Repository traits are implemented by the infrastructure layer; handlers
//! depend only on the traits.

pub mod entities;
pub mod repositories;
