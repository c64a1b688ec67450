//! Authenticated API client handle.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native (tests): request methods return a transport error since the
//! delivery API is only reachable from the browser build.
//!
//! ERROR HANDLING
//! ==============
//! Every request funnels through [`ContentfulClient::get_json`], which maps
//! network failures to `ClientError::Transport`, non-success responses
//! through the error-body parser, and schema mismatches to
//! `ClientError::Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use contentful::types::{Asset, Collection, ContentType, Entry};
use contentful::urls;
use contentful::ClientError;
use serde::de::DeserializeOwned;

use crate::state::session::Credentials;

/// Page size for list requests; deeper paging stays out of scope.
pub const PAGE_SIZE: u64 = 100;

/// A validated connection to one space on one API host.
///
/// Existence of a `ContentfulClient` means [`ContentfulClient::connect`]
/// succeeded at least once for this credential triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentfulClient {
    space: String,
    access_token: String,
    preview: bool,
}

impl ContentfulClient {
    /// Validate the credential triple by fetching the space root and return
    /// a ready client on success.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] produced by the validation request; the
    /// caller decides how to surface it (the route guard augments
    /// invalid-token failures with a preview-vs-delivery hint).
    pub async fn connect(credentials: &Credentials) -> Result<Self, ClientError> {
        let client = Self {
            space: credentials.space.clone(),
            access_token: credentials.access_token.clone(),
            preview: credentials.preview,
        };
        let _: serde_json::Value = client
            .get_json(&urls::space(client.host(), &client.space))
            .await?;
        Ok(client)
    }

    /// Space id this client is bound to.
    #[must_use]
    pub fn space_id(&self) -> &str {
        &self.space
    }

    /// Whether this client targets the preview host.
    #[must_use]
    pub fn preview(&self) -> bool {
        self.preview
    }

    fn host(&self) -> &'static str {
        urls::api_host(self.preview)
    }

    /// Fetch all content types of the space.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn content_types(&self) -> Result<Collection<ContentType>, ClientError> {
        self.get_json(&urls::content_types(self.host(), &self.space))
            .await
    }

    /// Fetch one content type by id.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn content_type(&self, id: &str) -> Result<ContentType, ClientError> {
        self.get_json(&urls::content_type(self.host(), &self.space, id))
            .await
    }

    /// Fetch a page of entries for one content type.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn entries(&self, content_type: &str, skip: u64) -> Result<Collection<Entry>, ClientError> {
        self.get_json(&urls::entries(
            self.host(),
            &self.space,
            Some(content_type),
            PAGE_SIZE,
            skip,
        ))
        .await
    }

    /// Fetch one entry by id.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn entry(&self, id: &str) -> Result<Entry, ClientError> {
        self.get_json(&urls::entry(self.host(), &self.space, id)).await
    }

    /// Fetch a page of assets.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn assets(&self, skip: u64) -> Result<Collection<Asset>, ClientError> {
        self.get_json(&urls::assets(self.host(), &self.space, PAGE_SIZE, skip))
            .await
    }

    /// Fetch one asset by id.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request or decode fails.
    pub async fn asset(&self, id: &str) -> Result<Asset, ClientError> {
        self.get_json(&urls::asset(self.host(), &self.space, id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .header("Authorization", &format!("Bearer {}", self.access_token))
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ClientError::from_response(status, &body));
            }
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ClientError::Transport("not available off-browser".to_owned()))
        }
    }
}
