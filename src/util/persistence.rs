//! Browser localStorage helpers for the settings-form draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes csr-only read/write behavior so the settings page can prefill
//! the last-used space id and preview flag without repeating web-sys glue.
//! The access token is deliberately never persisted.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::de::DeserializeOwned;
use serde::Serialize;

const DRAFT_KEY: &str = "discovery_settings_draft";

/// Persisted portion of the settings form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct SettingsDraft {
    pub space: String,
    pub preview: bool,
}

/// Load the settings draft from `localStorage`, if one was saved.
#[must_use]
pub fn load_draft() -> Option<SettingsDraft> {
    load_json(DRAFT_KEY)
}

/// Save the settings draft to `localStorage`.
pub fn save_draft(draft: &SettingsDraft) {
    save_json(DRAFT_KEY, draft);
}

/// Load a JSON value from `localStorage` for `key`.
fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
