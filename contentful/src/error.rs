//! Error model for API calls against the delivery/preview hosts.
//!
//! ERROR HANDLING
//! ==============
//! Failed responses carry a JSON error body with a machine-readable `sys.id`
//! (e.g. `"AccessTokenInvalid"`, `"NotFound"`). Parsing that body is
//! best-effort: an unparseable body still yields a usable `Api` error with
//! the raw status code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// `sys.id` value Contentful uses for rejected access tokens.
pub const ACCESS_TOKEN_INVALID: &str = "AccessTokenInvalid";

/// Error returned by client initialization and content fetches.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an API response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("{message}")]
    Api {
        /// Machine-readable error identifier from the body's `sys.id`.
        id: Option<String>,
        /// HTTP status code.
        status: u16,
        /// Human-readable message shown to the user.
        message: String,
    },
    /// A success response whose body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// JSON body shape of Contentful error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    sys: Option<ErrorSys>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorSys {
    #[serde(default)]
    id: Option<String>,
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a non-success response body,
    /// falling back to a generic message when the body is not the documented
    /// error JSON.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
        let (id, message) = match parsed {
            Some(body) => (
                body.sys.and_then(|s| s.id),
                body.message
                    .unwrap_or_else(|| default_message(status)),
            ),
            None => (None, default_message(status)),
        };
        Self::Api { id, status, message }
    }

    /// Whether this is the rejected-access-token error that warrants the
    /// Preview-vs-Delivery hint.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            Self::Api { id: Some(id), .. } if id == ACCESS_TOKEN_INVALID
        )
    }
}

fn default_message(status: u16) -> String {
    format!("the API responded with status {status}")
}
