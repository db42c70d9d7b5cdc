//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::repositories::BookRepository;

/// Immutable application state, constructed once at startup.
///
/// Handlers receive it by value (cheap `Arc` clones); there is no mutable
/// process-wide state outside the storage backend. Resource links derive
/// their base from each request's `Host` header, so the state carries no
/// base URL.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }
}
