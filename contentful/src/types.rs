//! Wire DTOs for the Contentful Delivery/Preview APIs.
//!
//! DESIGN
//! ======
//! Field payloads stay open-ended (`serde_json::Value`) because entry shapes
//! are defined per space by the content model; everything the app renders
//! structurally (sys metadata, content-type definitions, asset files) gets a
//! typed representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// System metadata common to all Contentful resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    /// Resource identifier.
    pub id: String,
    /// Resource type, e.g. `"Entry"`, `"Asset"`, `"ContentType"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601 creation timestamp; absent on space resources.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601 last-update timestamp; absent on space resources.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Link to the entry's content type; only present on entries.
    #[serde(default)]
    pub content_type: Option<Link>,
}

/// A link to another resource, carried inside `sys`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub sys: LinkSys,
}

/// Target metadata of a [`Link`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub link_type: Option<String>,
}

/// A single field definition inside a content type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    /// Field type, e.g. `"Symbol"`, `"Text"`, `"Link"`, `"Array"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub localized: bool,
}

/// A content type: the schema for a family of entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub sys: Sys,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Field whose value serves as an entry's display title.
    #[serde(default)]
    pub display_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl ContentType {
    /// Kind of the field with the given id, if the content type defines it.
    #[must_use]
    pub fn field_kind(&self, field_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.id == field_id)
            .map(|f| f.kind.as_str())
    }
}

/// An entry with its content model applied server-side: `fields` maps field
/// ids to already-localized values, in the content model's order
/// (`serde_json` is built with `preserve_order`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

impl Entry {
    /// Best-effort display title: the value of `display_field` when it is a
    /// string, falling back to the entry id.
    #[must_use]
    pub fn title(&self, display_field: Option<&str>) -> String {
        display_field
            .and_then(|id| self.fields.get(id))
            .and_then(Value::as_str)
            .map_or_else(|| self.sys.id.clone(), ToOwned::to_owned)
    }
}

/// A media asset and its backing file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

/// Localized asset fields as returned by the delivery API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFile>,
}

/// The uploaded file behind an asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    /// Protocol-relative URL (`//images.ctfassets.net/...`).
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub details: Option<FileDetails>,
}

impl AssetFile {
    /// Whether the file is renderable as an inline image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

/// Size and (for images) dimension metadata of an [`AssetFile`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileDetails {
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub image: Option<ImageDetails>,
}

/// Pixel dimensions of an image file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub width: u32,
    pub height: u32,
}

/// A paged list response (`sys.type == "Array"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
