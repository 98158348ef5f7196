//! Bearer-token gate.
//!
//! Installed as a route layer on the bookmark routes, so it runs before any
//! handler and an unauthenticated request never reaches storage.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::error;

use crate::error::{ApiError, UNAUTHORIZED_REQUEST};
use crate::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Reject requests whose bearer token does not match the configured one.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = matches!(
        bearer_token(request.headers()),
        Some(token) if token == &*state.api_token
    );
    if authorized {
        return Ok(next.run(request).await);
    }

    error!(
        subsystem = "api",
        component = "auth",
        method = %request.method(),
        path = %request.uri().path(),
        "Unauthorized request to path: {}",
        request.uri().path()
    );
    Err(ApiError::Unauthorized(UNAUTHORIZED_REQUEST.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers_with("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers_with("bearer abc123")), None);
    }

    #[test]
    fn test_bearer_token_empty() {
        assert_eq!(bearer_token(&headers_with("Bearer    ")), None);
    }
}
