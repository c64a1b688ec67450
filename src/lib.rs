//! Contentful Discovery: a client-side rendered browser for the content
//! types, entries, and assets of a Contentful space.
//!
//! Credentials travel in URL query parameters; the `guard` module gates
//! every content route behind a validated API client. The `contentful` path
//! crate owns the wire schema and endpoint builders this app speaks.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
