//! UUID v7 utilities for time-ordered identifiers.
//!
//! Bookmark ids are UUIDv7, which embed a millisecond Unix timestamp in the
//! leading 48 bits. Sorting by id therefore sorts by creation time, which is
//! what gives `list()` a stable creation order on every backend.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// # Example
///
/// ```
/// use bookmarks_core::uuid_utils::new_v7;
///
/// let id = new_v7();
/// assert_eq!(id.get_version_num(), 7);
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Check if a UUID is version 7.
#[inline]
pub fn is_v7(uuid: &Uuid) -> bool {
    uuid.get_version_num() == 7
}
