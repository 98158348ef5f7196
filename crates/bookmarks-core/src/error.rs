//! Error types for the bookmarks API.

use thiserror::Error;

/// Result type alias using the bookmarks Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bookmark operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Message suitable for a response body.
    ///
    /// Only caller-facing variants carry their detail; everything else
    /// collapses to a generic message so backend details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Error::NotFound(msg) | Error::InvalidInput(msg) | Error::Unauthorized(msg) => {
                msg.clone()
            }
            Error::Database(_) | Error::Config(_) | Error::Internal(_) => {
                "server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("Bookmark Not Found".to_string());
        assert_eq!(err.to_string(), "Not found: Bookmark Not Found");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("'title' is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: 'title' is required");
    }

    #[test]
    fn test_error_display_unauthorized() {
        let err = Error::Unauthorized("invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: invalid token");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("API_TOKEN is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: API_TOKEN is not set");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_public_message_passes_through_caller_errors() {
        let err = Error::InvalidInput("'url' must be a valid URL".to_string());
        assert_eq!(err.public_message(), "'url' must be a valid URL");

        let err = Error::NotFound("Bookmark Not Found".to_string());
        assert_eq!(err.public_message(), "Bookmark Not Found");
    }

    #[test]
    fn test_public_message_hides_backend_detail() {
        let err = Error::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "server error");

        let err = Error::Internal("connection reset by peer at 10.0.0.3".to_string());
        assert_eq!(err.public_message(), "server error");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
