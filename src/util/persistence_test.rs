#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_draft_is_none_off_browser() {
    assert!(load_draft().is_none());
}

#[test]
fn save_draft_is_noop_but_callable() {
    save_draft(&SettingsDraft {
        space: "xyz".to_owned(),
        preview: true,
    });
}

#[test]
fn draft_serializes_space_and_preview_only() {
    let draft = SettingsDraft {
        space: "xyz".to_owned(),
        preview: true,
    };
    let raw = serde_json::to_string(&draft).expect("draft json");
    assert_eq!(raw, r#"{"space":"xyz","preview":true}"#);
    let back: SettingsDraft = serde_json::from_str(&raw).expect("draft roundtrip");
    assert_eq!(back, draft);
}
