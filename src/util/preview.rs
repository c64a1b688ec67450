//! Preview-mode detection over the raw `preview` query value.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Whether the `preview` query parameter requests the Preview API.
///
/// True iff the parameter is present and truthy: anything except the empty
/// string, `"0"`, and `"false"` (case-insensitive) counts.
#[must_use]
pub fn is_preview_set(value: Option<&str>) -> bool {
    match value {
        None | Some("") => false,
        Some(v) => {
            let v = v.trim();
            !v.is_empty() && !v.eq_ignore_ascii_case("false") && v != "0"
        }
    }
}
