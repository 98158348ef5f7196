//! Bookmark CRUD handlers.
//!
//! Each handler validates its input before touching storage, then
//! HTML-escapes text fields on the way out.

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use bookmarks_core::{validation::BookmarkInput, Bookmark};

use crate::error::ApiError;
use crate::state::AppState;

/// Route ids that are not UUIDs cannot match any bookmark.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Log a rejected write and hand the error back.
fn reject(op: &'static str, id: Option<&str>, err: ApiError) -> ApiError {
    let reason = match &err {
        ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::PayloadTooLarge(msg) => {
            msg.as_str()
        }
        _ => "internal error",
    };
    error!(
        subsystem = "api",
        component = "bookmarks",
        op,
        bookmark_id = id.unwrap_or("-"),
        "Bookmark {} rejected: {}",
        op,
        reason
    );
    err
}

/// `GET /bookmarks`
pub async fn list_bookmarks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = state.bookmarks.list().await?;
    Ok(Json(bookmarks.iter().map(Bookmark::sanitized).collect()))
}

/// `GET /bookmarks/:id`
pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bookmark>, ApiError> {
    let Some(uuid) = parse_id(&id) else {
        return Err(ApiError::bookmark_not_found());
    };

    let bookmark = state
        .bookmarks
        .get(uuid)
        .await?
        .ok_or_else(ApiError::bookmark_not_found)?;
    Ok(Json(bookmark.sanitized()))
}

/// `POST /bookmarks`
///
/// Responds 201 with a `Location` header for the new resource.
pub async fn create_bookmark(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<BookmarkInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body.map_err(|e| reject("create", None, e.into()))?;
    let req = input
        .into_create()
        .map_err(|e| reject("create", None, e.into()))?;

    let bookmark = state.bookmarks.insert(req).await?;
    info!(
        subsystem = "api",
        component = "bookmarks",
        op = "create",
        bookmark_id = %bookmark.id,
        "Bookmark with id {} created",
        bookmark.id
    );

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark.sanitized()),
    ))
}

/// `PATCH /bookmarks/:id`
///
/// Only the supplied fields change. The body is validated before the id is
/// looked up, so a bad body is 400 even for an unknown id.
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<BookmarkInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = body.map_err(|e| reject("update", Some(id.as_str()), e.into()))?;
    let req = input
        .into_update()
        .map_err(|e| reject("update", Some(id.as_str()), e.into()))?;

    let affected = match parse_id(&id) {
        Some(uuid) => state.bookmarks.update(uuid, req).await?,
        None => 0,
    };
    if affected == 0 {
        return Err(reject(
            "update",
            Some(id.as_str()),
            ApiError::bookmark_not_found(),
        ));
    }

    info!(
        subsystem = "api",
        component = "bookmarks",
        op = "update",
        bookmark_id = %id,
        "Bookmark with id {} updated",
        id
    );
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /bookmarks/:id`
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let affected = match parse_id(&id) {
        Some(uuid) => state.bookmarks.delete(uuid).await?,
        None => 0,
    };
    if affected == 0 {
        return Err(reject(
            "delete",
            Some(id.as_str()),
            ApiError::bookmark_not_found(),
        ));
    }

    info!(
        subsystem = "api",
        component = "bookmarks",
        op = "delete",
        bookmark_id = %id,
        "Bookmark with id {} deleted",
        id
    );
    Ok(StatusCode::NO_CONTENT)
}
