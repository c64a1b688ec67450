//! Shared data model for the Contentful Delivery and Preview APIs.
//!
//! This crate owns the wire representation consumed by the `discovery` app:
//! serde DTOs mirroring the CDA/CPA JSON schema, endpoint builders for the
//! two API hosts, and the error model surfaced to the credential gate. It
//! deliberately contains no IO so every piece is unit-testable off-browser.

pub mod error;
pub mod types;
pub mod urls;

pub use error::ClientError;
pub use types::{Asset, Collection, ContentType, Entry, Sys};
