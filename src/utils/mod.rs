//! Small helpers shared across handlers.

pub mod base_url;

pub use base_url::request_base_url;
