//! Generic renderer for a single entry field.
//!
//! DESIGN
//! ======
//! Entry fields are schema-less JSON from the app's point of view; the
//! content-type field kind (when known) picks markdown rendering for long
//! text, everything else degrades to plain text or pretty-printed JSON.

#[cfg(test)]
#[path = "field_value_test.rs"]
mod field_value_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::util::markdown;

/// How a field value should be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendering {
    /// Long-text field: pre-rendered HTML from markdown.
    Markdown(String),
    /// Scalar value shown as-is.
    Text(String),
    /// Structured value (links, arrays, objects) shown as indented JSON.
    Json(String),
}

/// Classify a field value by its declared kind and JSON shape.
#[must_use]
pub fn classify(kind: Option<&str>, value: &Value) -> Rendering {
    match value {
        Value::String(s) if kind == Some("Text") => Rendering::Markdown(markdown::render_html(s)),
        Value::String(s) => Rendering::Text(s.clone()),
        Value::Bool(b) => Rendering::Text(b.to_string()),
        Value::Number(n) => Rendering::Text(n.to_string()),
        Value::Null => Rendering::Text(String::new()),
        other => Rendering::Json(
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        ),
    }
}

/// One labeled field row in an entry detail view.
#[component]
pub fn FieldValue(
    name: String,
    #[prop(optional_no_strip)] kind: Option<String>,
    value: Value,
) -> impl IntoView {
    let rendering = classify(kind.as_deref(), &value);
    view! {
        <div class="field-row">
            <span class="field-row__name">{name}</span>
            {match rendering {
                Rendering::Markdown(html) => view! {
                    <div class="field-row__markdown" inner_html=html></div>
                }
                .into_any(),
                Rendering::Text(text) => view! {
                    <span class="field-row__text">{text}</span>
                }
                .into_any(),
                Rendering::Json(json) => view! {
                    <pre class="field-row__json">{json}</pre>
                }
                .into_any(),
            }}
        </div>
    }
}
