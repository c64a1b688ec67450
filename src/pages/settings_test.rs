use super::*;

#[test]
fn browse_href_targets_content_types_with_credentials() {
    let credentials = Credentials {
        access_token: "abc".to_owned(),
        space: "xyz".to_owned(),
        preview: false,
    };
    assert_eq!(
        browse_href(&credentials),
        "/entries/by-content-type?access_token=abc&space_id=xyz"
    );
}

#[test]
fn browse_href_carries_preview_flag() {
    let credentials = Credentials {
        access_token: "abc".to_owned(),
        space: "xyz".to_owned(),
        preview: true,
    };
    assert_eq!(
        browse_href(&credentials),
        "/entries/by-content-type?access_token=abc&space_id=xyz&preview=true"
    );
}
