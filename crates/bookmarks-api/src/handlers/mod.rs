//! HTTP handlers for bookmarks-api.

pub mod bookmarks;

use axum::{response::IntoResponse, Json};

pub use bookmarks::{
    create_bookmark, delete_bookmark, get_bookmark, list_bookmarks, update_bookmark,
};

/// `GET /health`, unauthenticated liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
