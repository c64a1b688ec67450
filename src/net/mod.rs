//! Networking layer for the Contentful delivery/preview APIs.
//!
//! `client` owns the authenticated request shell; the URL builders and wire
//! schema it speaks live in the `contentful` crate.

pub mod client;
