//! HTTP error responder.
//!
//! Every failure becomes a JSON body. Caller errors carry their message as
//! `{"error": {"message": ...}}`; the bearer gate answers with the flat
//! `{"error": "Unauthorized request"}` its clients already expect. Storage
//! and other internal failures are logged in full and reported as a bare
//! `server error`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const BOOKMARK_NOT_FOUND: &str = "Bookmark Not Found";
pub const UNAUTHORIZED_REQUEST: &str = "Unauthorized request";

#[derive(Debug)]
pub enum ApiError {
    Internal(bookmarks_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
}

impl ApiError {
    pub fn bookmark_not_found() -> Self {
        ApiError::NotFound(BOOKMARK_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<bookmarks_core::Error> for ApiError {
    fn from(err: bookmarks_core::Error) -> Self {
        match err {
            bookmarks_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            bookmarks_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            bookmarks_core::Error::Unauthorized(msg) => ApiError::Unauthorized(msg),
            other => ApiError::Internal(other),
        }
    }
}

/// Bodies cut off by the size limit are 413 however they were sent; every
/// other rejection is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Internal(err) => {
                tracing::error!(subsystem = "api", error = %err, "Request failed");
                json!({ "error": { "message": err.public_message() } })
            }
            ApiError::Unauthorized(msg) => json!({ "error": msg }),
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::PayloadTooLarge(msg) => {
                json!({ "error": { "message": msg } })
            }
        };

        (status, Json(body)).into_response()
    }
}
