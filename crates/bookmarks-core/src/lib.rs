//! # bookmarks-core
//!
//! Core types, traits, and validation rules for the bookmarks API.
//!
//! This crate provides the domain model and the storage trait that the
//! database backends implement and the HTTP layer consumes.

pub mod error;
pub mod models;
pub mod sanitize;
pub mod traits;
pub mod uuid_utils;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use sanitize::html_escape;
pub use traits::*;
pub use uuid_utils::{is_v7, new_v7};
