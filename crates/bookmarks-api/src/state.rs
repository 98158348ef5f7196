//! Application state shared across handlers.

use std::sync::Arc;

use bookmarks_core::BookmarkRepository;

#[derive(Clone)]
pub struct AppState {
    /// Storage backend; PostgreSQL in production, in-memory in tests.
    pub bookmarks: Arc<dyn BookmarkRepository>,
    /// Bearer token every `/bookmarks` request must present.
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>, api_token: &str) -> Self {
        Self {
            bookmarks,
            api_token: Arc::from(api_token),
        }
    }
}
