use super::*;

#[test]
fn absent_parameter_is_not_preview() {
    assert!(!is_preview_set(None));
}

#[test]
fn empty_value_is_not_preview() {
    assert!(!is_preview_set(Some("")));
    assert!(!is_preview_set(Some("   ")));
}

#[test]
fn false_and_zero_are_not_preview() {
    assert!(!is_preview_set(Some("false")));
    assert!(!is_preview_set(Some("FALSE")));
    assert!(!is_preview_set(Some("0")));
}

#[test]
fn truthy_values_enable_preview() {
    assert!(is_preview_set(Some("true")));
    assert!(is_preview_set(Some("TRUE")));
    assert!(is_preview_set(Some("1")));
    assert!(is_preview_set(Some("yes")));
}
