//! Storage trait for bookmarks.
//!
//! The HTTP layer only ever sees `dyn BookmarkRepository`, so PostgreSQL and
//! in-memory storage are interchangeable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Bookmark, CreateBookmarkRequest, UpdateBookmarkRequest};

/// Repository for bookmark CRUD operations.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// List all bookmarks in creation order.
    async fn list(&self) -> Result<Vec<Bookmark>>;

    /// Fetch a bookmark by ID. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: Uuid) -> Result<Option<Bookmark>>;

    /// Insert a new bookmark, assigning it a fresh id.
    async fn insert(&self, req: CreateBookmarkRequest) -> Result<Bookmark>;

    /// Apply a partial update. Returns the number of affected bookmarks.
    async fn update(&self, id: Uuid, req: UpdateBookmarkRequest) -> Result<u64>;

    /// Delete a bookmark. Returns the number of affected bookmarks.
    async fn delete(&self, id: Uuid) -> Result<u64>;
}
