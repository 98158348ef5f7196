//! Request validation for bookmark writes.
//!
//! [`BookmarkInput`] is the loosely-typed body a client sends. It is turned
//! into a [`CreateBookmarkRequest`] or [`UpdateBookmarkRequest`] only after
//! every rule below holds, so storage never sees an invalid record.
//!
//! Rules, checked in this order:
//!
//! | Operation | Rule | Message |
//! |-----------|------|---------|
//! | create | `title`, `url`, `rating` present | `'<field>' is required` |
//! | create, update | `rating` is an integer in `0..=5` | [`RATING_MESSAGE`] |
//! | create, update | `url` is an absolute http(s) URL | [`URL_MESSAGE`] |
//! | update | at least one field present | [`EMPTY_UPDATE_MESSAGE`] |
//! | update | `title` not blank | [`EMPTY_TITLE_MESSAGE`] |

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::models::{CreateBookmarkRequest, UpdateBookmarkRequest};

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 0;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

pub const RATING_MESSAGE: &str = "'rating' must be a number between 0 and 5";
pub const URL_MESSAGE: &str = "'url' must be a valid URL";
pub const EMPTY_UPDATE_MESSAGE: &str =
    "Request body must contain either 'title', 'url', 'description' or 'rating'";
pub const EMPTY_TITLE_MESSAGE: &str = "'title' must not be empty";

/// Bookmark fields as received over the wire.
///
/// `rating` stays a raw JSON value so that `"3"` or `2.5` surface as a rating
/// error rather than a body parse error. Any `id` a client sends is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookmarkInput {
    /// Validate a full record for insertion.
    pub fn into_create(self) -> Result<CreateBookmarkRequest> {
        let title = require_text(self.title, "title")?;
        let url = require_text(self.url, "url")?;
        let rating = self
            .rating
            .ok_or_else(|| Error::InvalidInput(required_message("rating")))?;

        let rating = parse_rating(&rating)?;
        validate_url(&url)?;

        Ok(CreateBookmarkRequest {
            title,
            url,
            rating,
            description: self.description,
        })
    }

    /// Validate a partial record for update.
    pub fn into_update(self) -> Result<UpdateBookmarkRequest> {
        if self.title.is_none()
            && self.url.is_none()
            && self.rating.is_none()
            && self.description.is_none()
        {
            return Err(Error::InvalidInput(EMPTY_UPDATE_MESSAGE.to_string()));
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(Error::InvalidInput(EMPTY_TITLE_MESSAGE.to_string()));
            }
        }

        let rating = self.rating.as_ref().map(parse_rating).transpose()?;

        if let Some(url) = &self.url {
            validate_url(url)?;
        }

        Ok(UpdateBookmarkRequest {
            title: self.title,
            url: self.url,
            rating,
            description: self.description,
        })
    }
}

/// Message for a missing required field.
pub fn required_message(field: &str) -> String {
    format!("'{}' is required", field)
}

/// A present, non-blank string.
fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::InvalidInput(required_message(field))),
    }
}

/// Accept a JSON integer in `MIN_RATING..=MAX_RATING`.
///
/// Whole floats such as `4.0` count as integers; strings and fractions do not.
pub fn parse_rating(value: &Value) -> Result<i32> {
    let whole = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    });

    match whole {
        Some(n) if (MIN_RATING as i64..=MAX_RATING as i64).contains(&n) => Ok(n as i32),
        _ => Err(Error::InvalidInput(RATING_MESSAGE.to_string())),
    }
}

/// Reject anything that is not an absolute http(s) URL with a host.
pub fn validate_url(candidate: &str) -> Result<()> {
    if is_web_uri(candidate) {
        Ok(())
    } else {
        Err(Error::InvalidInput(URL_MESSAGE.to_string()))
    }
}

/// True for absolute `http://` or `https://` URLs with a non-empty host.
pub fn is_web_uri(candidate: &str) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };

    // The url crate accepts "http:example.com"; require the authority form.
    let has_authority = candidate
        .get(parsed.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));

    matches!(parsed.scheme(), "http" | "https")
        && has_authority
        && parsed.host_str().is_some_and(|host| !host.is_empty())
}
