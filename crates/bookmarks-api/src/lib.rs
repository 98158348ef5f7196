//! bookmarks-api - HTTP API server for bookmarks.
//!
//! The binary in `main.rs` wires configuration, logging and storage together;
//! everything it serves is built here so integration tests can drive the same
//! router in-process.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;

pub use config::{HttpOptions, LogConfig, LogFormat, ServerConfig, StorageBackend};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
