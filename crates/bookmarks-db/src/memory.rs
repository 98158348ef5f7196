//! In-memory bookmark repository.
//!
//! Process-local storage for development and tests. Records live in a `Vec`
//! so listing returns them in insertion order, matching the PostgreSQL
//! backend's creation-order listing.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bookmarks_core::{
    new_v7, Bookmark, BookmarkRepository, CreateBookmarkRequest, Result, UpdateBookmarkRequest,
};

/// In-memory implementation of BookmarkRepository.
#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records, e.g. fixtures.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: RwLock::new(bookmarks),
        }
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Bookmark>> {
        let bookmarks = self.bookmarks.read().await;
        Ok(bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, req: CreateBookmarkRequest) -> Result<Bookmark> {
        let bookmark = Bookmark {
            id: new_v7(),
            title: req.title,
            url: req.url,
            rating: req.rating,
            description: req.description,
        };
        self.bookmarks.write().await.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update(&self, id: Uuid, req: UpdateBookmarkRequest) -> Result<u64> {
        let mut bookmarks = self.bookmarks.write().await;
        match bookmarks.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => {
                bookmark.apply(&req);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut bookmarks = self.bookmarks.write().await;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);
        Ok((before - bookmarks.len()) as u64)
    }
}
