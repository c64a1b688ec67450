//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (the credential gate, data
//! fetches, loading/error state) and delegates rendering details to
//! `components`.

pub mod asset;
pub mod assets;
pub mod content_types;
pub mod entries;
pub mod entry;
pub mod error;
pub mod settings;
