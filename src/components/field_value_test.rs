use super::*;
use serde_json::json;

#[test]
fn text_kind_strings_render_as_markdown() {
    let rendering = classify(Some("Text"), &json!("# Heading"));
    let Rendering::Markdown(html) = rendering else {
        panic!("expected markdown");
    };
    assert!(html.contains("<h1>"));
}

#[test]
fn symbol_strings_render_as_plain_text() {
    assert_eq!(
        classify(Some("Symbol"), &json!("Nyan Cat")),
        Rendering::Text("Nyan Cat".to_owned())
    );
}

#[test]
fn strings_without_kind_render_as_plain_text() {
    assert_eq!(
        classify(None, &json!("hello")),
        Rendering::Text("hello".to_owned())
    );
}

#[test]
fn scalars_render_as_text() {
    assert_eq!(classify(None, &json!(1337)), Rendering::Text("1337".to_owned()));
    assert_eq!(classify(None, &json!(true)), Rendering::Text("true".to_owned()));
    assert_eq!(classify(None, &Value::Null), Rendering::Text(String::new()));
}

#[test]
fn structured_values_render_as_pretty_json() {
    let rendering = classify(Some("Link"), &json!({ "sys": { "id": "x" } }));
    let Rendering::Json(text) = rendering else {
        panic!("expected json");
    };
    assert!(text.contains("\"sys\""));
    assert!(text.contains('\n'), "expected indented output, got {text}");
}

#[test]
fn arrays_render_as_json() {
    assert!(matches!(classify(Some("Array"), &json!([1, 2])), Rendering::Json(_)));
}

#[test]
fn props_take_the_field_kind_as_an_option() {
    // The entry page passes the looked-up kind through as-is, Some or None.
    let props = FieldValueProps::builder()
        .name("body".to_owned())
        .kind(Some("Text".to_owned()))
        .value(json!("# Heading"))
        .build();
    assert_eq!(props.kind.as_deref(), Some("Text"));

    let untyped = FieldValueProps::builder()
        .name("extra".to_owned())
        .value(json!(42))
        .build();
    assert_eq!(untyped.kind, None);
}
