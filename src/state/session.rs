//! Credential-session state for the running page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard compares candidate credentials from the URL against this
//! session and overwrites it only after a successful client initialization,
//! so the stored triple always reflects the currently active client handle
//! (or the initial empty value).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::client::ContentfulClient;

/// A space / access-token / preview triple taken from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub space: String,
    pub preview: bool,
}

impl Credentials {
    /// Whether both the access token and the space id are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.space.is_empty()
    }

    /// Whether `other` addresses the same client as `self`.
    ///
    /// Only the token and the space take part in the comparison; flipping
    /// the preview flag alone targets a different host with the same token,
    /// which the API treats as an invalid-token request, mirrored to the
    /// user by the gate's error path rather than silently ignored here.
    #[must_use]
    pub fn same_client(&self, other: &Self) -> bool {
        self.access_token == other.access_token && self.space == other.space
    }

    /// Query string carrying this triple, used by every in-app link so the
    /// gate keeps passing without re-initialization.
    #[must_use]
    pub fn as_query(&self) -> String {
        let mut query = format!(
            "access_token={}&space_id={}",
            urlencoding::encode(&self.access_token),
            urlencoding::encode(&self.space),
        );
        if self.preview {
            query.push_str("&preview=true");
        }
        query
    }
}

/// Session state owned by the root component and provided via context.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Credentials of the active client; empty until a connect succeeds.
    pub credentials: Credentials,
    /// Message for the error route; set on initialization failure.
    pub last_error: Option<String>,
    /// Initialization attempt counter; fences stale async completions.
    pub epoch: u64,
}

/// The active remote client handle, if any initialization has succeeded.
#[derive(Clone, Debug, Default)]
pub struct ClientState {
    pub client: Option<ContentfulClient>,
}
