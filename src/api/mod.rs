//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into repository operations and formats responses
//! according to the API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`representation`] - Resource representations and pretty-JSON rendering

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod representation;
