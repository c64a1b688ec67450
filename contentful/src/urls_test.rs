use super::*;

#[test]
fn api_host_selects_preview_or_delivery() {
    assert_eq!(api_host(false), "https://cdn.contentful.com");
    assert_eq!(api_host(true), "https://preview.contentful.com");
}

#[test]
fn space_url_formats_expected_path() {
    assert_eq!(
        space(DELIVERY_HOST, "cfexampleapi"),
        "https://cdn.contentful.com/spaces/cfexampleapi"
    );
}

#[test]
fn space_url_percent_encodes_space_id() {
    assert_eq!(
        space(DELIVERY_HOST, "a b/c"),
        "https://cdn.contentful.com/spaces/a%20b%2Fc"
    );
}

#[test]
fn content_types_url_formats_expected_path() {
    assert_eq!(
        content_types(PREVIEW_HOST, "xyz"),
        "https://preview.contentful.com/spaces/xyz/content_types"
    );
}

#[test]
fn content_type_url_addresses_single_type() {
    assert_eq!(
        content_type(DELIVERY_HOST, "xyz", "blog post"),
        "https://cdn.contentful.com/spaces/xyz/content_types/blog%20post"
    );
}

#[test]
fn entries_url_without_filter_carries_paging_only() {
    assert_eq!(
        entries(DELIVERY_HOST, "xyz", None, 100, 0),
        "https://cdn.contentful.com/spaces/xyz/entries?limit=100&skip=0"
    );
}

#[test]
fn entries_url_appends_encoded_content_type_filter() {
    assert_eq!(
        entries(DELIVERY_HOST, "xyz", Some("blog post"), 50, 100),
        "https://cdn.contentful.com/spaces/xyz/entries?limit=50&skip=100&content_type=blog%20post"
    );
}

#[test]
fn entry_and_asset_urls_address_single_resources() {
    assert_eq!(
        entry(DELIVERY_HOST, "xyz", "nyancat"),
        "https://cdn.contentful.com/spaces/xyz/entries/nyancat"
    );
    assert_eq!(
        asset(DELIVERY_HOST, "xyz", "nyancat-img"),
        "https://cdn.contentful.com/spaces/xyz/assets/nyancat-img"
    );
}

#[test]
fn assets_url_carries_paging() {
    assert_eq!(
        assets(PREVIEW_HOST, "xyz", 100, 200),
        "https://preview.contentful.com/spaces/xyz/assets?limit=100&skip=200"
    );
}

#[test]
fn file_url_upgrades_protocol_relative_references() {
    assert_eq!(
        file_url("//images.ctfassets.net/xyz/cat.png"),
        "https://images.ctfassets.net/xyz/cat.png"
    );
}

#[test]
fn file_url_leaves_absolute_urls_untouched() {
    assert_eq!(
        file_url("https://images.ctfassets.net/xyz/cat.png"),
        "https://images.ctfassets.net/xyz/cat.png"
    );
}
