//! Endpoint builders for the delivery and preview hosts.
//!
//! All builders are pure string formatters so the request layer stays a thin
//! IO shell. User-supplied path/query values are percent-encoded.

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

use urlencoding::encode;

/// Content Delivery API host (published content).
pub const DELIVERY_HOST: &str = "https://cdn.contentful.com";
/// Content Preview API host (draft content included).
pub const PREVIEW_HOST: &str = "https://preview.contentful.com";

/// Select the API host for the given preview flag.
#[must_use]
pub fn api_host(preview: bool) -> &'static str {
    if preview { PREVIEW_HOST } else { DELIVERY_HOST }
}

/// Space root; fetching it validates a credential pair.
#[must_use]
pub fn space(host: &str, space_id: &str) -> String {
    format!("{host}/spaces/{}", encode(space_id))
}

/// All content types of a space.
#[must_use]
pub fn content_types(host: &str, space_id: &str) -> String {
    format!("{}/content_types", space(host, space_id))
}

/// A single content type by id.
#[must_use]
pub fn content_type(host: &str, space_id: &str, type_id: &str) -> String {
    format!("{}/{}", content_types(host, space_id), encode(type_id))
}

/// A page of entries, optionally restricted to one content type.
#[must_use]
pub fn entries(
    host: &str,
    space_id: &str,
    content_type: Option<&str>,
    limit: u64,
    skip: u64,
) -> String {
    let mut url = format!("{}/entries?limit={limit}&skip={skip}", space(host, space_id));
    if let Some(ct) = content_type {
        url.push_str("&content_type=");
        url.push_str(&encode(ct));
    }
    url
}

/// A single entry by id.
#[must_use]
pub fn entry(host: &str, space_id: &str, entry_id: &str) -> String {
    format!("{}/entries/{}", space(host, space_id), encode(entry_id))
}

/// A page of assets.
#[must_use]
pub fn assets(host: &str, space_id: &str, limit: u64, skip: u64) -> String {
    format!("{}/assets?limit={limit}&skip={skip}", space(host, space_id))
}

/// A single asset by id.
#[must_use]
pub fn asset(host: &str, space_id: &str, asset_id: &str) -> String {
    format!("{}/assets/{}", space(host, space_id), encode(asset_id))
}

/// Normalize the protocol-relative file URLs the API returns
/// (`//images.ctfassets.net/...`) so they load from any document origin.
#[must_use]
pub fn file_url(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        raw.to_owned()
    }
}
