//! End-to-end tests: JSON text → inference → rendered struct templates

use pretty_assertions::assert_eq;
use structgen::render::render_registry;
use structgen::schema::{CollisionPolicy, StructInferrer};
use structgen::{infer_structs, Error};

// ============================================================================
// Rendered Output Tests
// ============================================================================

#[test]
fn test_nested_object_end_to_end() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"id": 1234, "error": {"code": 200, "message": "abc"}}"#).unwrap();

    let registry = infer_structs(&value).unwrap();
    let output = render_registry(&registry);

    let expected = "type MyStruct struct {\n  \
                    Id int `json:\"id,omitempty\"`\n  \
                    Error Error `json:\"error,omitempty\"`\n\
                    }\n\
                    \n\
                    type Error struct {\n  \
                    Code int `json:\"code,omitempty\"`\n  \
                    Message string `json:\"message,omitempty\"`\n\
                    }\n";
    assert_eq!(output, expected);
}

#[test]
fn test_empty_object_end_to_end() {
    let value: serde_json::Value = serde_json::from_str("{}").unwrap();

    let registry = infer_structs(&value).unwrap();

    assert_eq!(render_registry(&registry), "type MyStruct struct {\n}\n");
}

#[test]
fn test_null_renders_optional_string() {
    let value = serde_json::json!({ "a": null });

    let registry = infer_structs(&value).unwrap();
    let output = render_registry(&registry);

    let expected = "type MyStruct struct {\n  \
                    A string `json:\"a,omitempty\"`\n\
                    }\n";
    assert_eq!(output, expected);
}

#[test]
fn test_array_of_objects_end_to_end() {
    let value = serde_json::json!({ "items": [{"x": 1}] });

    let registry = infer_structs(&value).unwrap();
    let output = render_registry(&registry);

    let expected = "type MyStruct struct {\n  \
                    Items []string `json:\"items,omitempty\"`\n\
                    }\n\
                    \n\
                    type ItemsItem struct {\n  \
                    X int `json:\"x,omitempty\"`\n\
                    }\n";
    assert_eq!(output, expected);
}

#[test]
fn test_mixed_scalars_end_to_end() {
    let value: serde_json::Value = serde_json::from_str(
        r#"{"name": "gopher", "count": 3, "ratio": 0.5, "whole": 4.0, "ok": true}"#,
    )
    .unwrap();

    let registry = infer_structs(&value).unwrap();
    let output = render_registry(&registry);

    let expected = "type MyStruct struct {\n  \
                    Name string `json:\"name,omitempty\"`\n  \
                    Count int `json:\"count,omitempty\"`\n  \
                    Ratio float `json:\"ratio,omitempty\"`\n  \
                    Whole int `json:\"whole,omitempty\"`\n  \
                    Ok bool `json:\"ok,omitempty\"`\n\
                    }\n";
    assert_eq!(output, expected);
}

// ============================================================================
// Registry Behavior Tests
// ============================================================================

#[test]
fn test_rendering_is_idempotent() {
    let value = serde_json::json!({
        "user": { "name": "a", "address": { "city": "b" } },
        "tags": ["x"]
    });

    let registry = infer_structs(&value).unwrap();

    assert_eq!(render_registry(&registry), render_registry(&registry));
}

#[test]
fn test_object_field_references_registered_record() {
    let value = serde_json::json!({ "profile": { "bio": "hello" } });

    let registry = infer_structs(&value).unwrap();

    let root = registry.get("MyStruct").unwrap();
    let field = root.field("Profile").unwrap();
    assert_eq!(field.ty.to_string(), "Profile");
    assert!(registry.contains("Profile"));
}

#[test]
fn test_collision_reject_surfaces_error() {
    let value = serde_json::json!({
        "a": { "info": { "x": 1 } },
        "b": { "info": { "y": 2 } }
    });

    let err = StructInferrer::new()
        .with_collision_policy(CollisionPolicy::Reject)
        .infer(&value)
        .unwrap_err();

    assert!(matches!(err, Error::NameCollision { .. }));
}

#[test]
fn test_registry_serializes_as_json_array() {
    let value = serde_json::json!({ "id": 7 });

    let registry = infer_structs(&value).unwrap();
    let dumped = serde_json::to_value(&registry).unwrap();

    assert!(dumped.is_array());
    assert_eq!(dumped[0]["name"], "MyStruct");
    assert_eq!(dumped[0]["fields"][0]["name"], "Id");
    assert_eq!(dumped[0]["fields"][0]["type"], serde_json::json!({"primitive": "int"}));
}

#[test]
fn test_deep_nesting_terminates() {
    // 100 levels of nesting, one record per level plus the root
    let mut text = String::new();
    for i in 0..100 {
        text.push_str(&format!(r#"{{"level{i}": "#));
    }
    text.push_str("{}");
    text.push_str(&"}".repeat(100));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let registry = infer_structs(&value).unwrap();

    assert_eq!(registry.len(), 101);
}
