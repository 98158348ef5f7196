//! Domain models for bookmarks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sanitize::html_escape;

/// A persisted bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    /// Always within `0..=5` at rest.
    pub rating: i32,
    pub description: Option<String>,
}

impl Bookmark {
    /// Copy of this bookmark with every text field HTML-escaped.
    ///
    /// `id` and `rating` are not text and pass through unchanged.
    pub fn sanitized(&self) -> Self {
        Self {
            id: self.id,
            title: html_escape(&self.title),
            url: html_escape(&self.url),
            rating: self.rating,
            description: self.description.as_deref().map(html_escape),
        }
    }

    /// Overwrite the fields supplied in `changes`, leaving the rest alone.
    pub fn apply(&mut self, changes: &UpdateBookmarkRequest) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(url) = &changes.url {
            self.url = url.clone();
        }
        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
        if let Some(description) = &changes.description {
            self.description = Some(description.clone());
        }
    }
}

/// Validated input for creating a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub url: String,
    pub rating: i32,
    pub description: Option<String>,
}

/// Validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<i32>,
    pub description: Option<String>,
}

impl UpdateBookmarkRequest {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.rating.is_none()
            && self.description.is_none()
    }
}
