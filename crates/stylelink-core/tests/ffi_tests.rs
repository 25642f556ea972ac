use serde_json::{json, Value};
use stylelink_core::{resolve_to_json, stamp_to_json, validate_to_json, PREVIEW_SCRIPT};

fn assert_success(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], true, "expected success=true, got: {json}");
    v
}

fn assert_failure(json: &str) -> Value {
    let v: Value = serde_json::from_str(json).expect("valid JSON");
    assert_eq!(v["success"], false, "expected success=false, got: {json}");
    v
}

fn project(link_styles: Value) -> String {
    json!({
        "admin": "ArticleAdmin",
        "model": {
            "name": "Article",
            "fields": [
                { "name": "styles", "type": "MonacoField" },
                { "name": "body", "type": "HTMLField" },
                { "name": "note", "type": "HTMLField" }
            ]
        },
        "localization": {
            "languages": ["en", "fr"],
            "default_language": "en",
            "translatable": ["styles", "body"]
        },
        "link_styles": link_styles
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// resolve_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_resolve_expands_languages() {
    let result = resolve_to_json(&project(json!([
        { "style_field": "styles", "html_fields": ["body", "note"] }
    ])));
    let v = assert_success(&result);
    assert_eq!(
        v["data"],
        json!({ "styles_en": ["body_en", "note"], "styles_fr": ["body_fr"] })
    );
}

#[test]
fn ffi_resolve_reports_configuration_error() {
    let result = resolve_to_json(&project(json!([
        { "style_field": "body", "html_fields": ["note"] }
    ])));
    let v = assert_failure(&result);
    assert!(v["error"]
        .as_str()
        .unwrap()
        .contains("must be an instance of MonacoField"));
}

#[test]
fn ffi_resolve_invalid_json() {
    let v = assert_failure(&resolve_to_json("not json"));
    assert!(v["error"].as_str().unwrap().starts_with("Invalid input JSON"));
}

// ---------------------------------------------------------------------------
// validate_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_validate_ok() {
    let result = validate_to_json(&project(json!([
        { "styles_field": "styles_fr", "html_fields": ["body"] }
    ])));
    let v = assert_success(&result);
    assert_eq!(v["data"]["valid"], true);
    assert!(v["data"].get("error").is_none());
}

#[test]
fn ffi_validate_missing_field() {
    let result = validate_to_json(&project(json!([
        { "style_field": "styles", "html_fields": ["summary"] }
    ])));
    let v = assert_success(&result);
    assert_eq!(v["data"]["valid"], false);
    assert!(v["data"]["error"]
        .as_str()
        .unwrap()
        .contains("Field 'summary' (base: 'summary') does not exist in model Article"));
}

// ---------------------------------------------------------------------------
// stamp_to_json
// ---------------------------------------------------------------------------

#[test]
fn ffi_stamp_default_form() {
    let result = stamp_to_json(&project(json!([
        { "style_field": "styles_en", "html_fields": ["body"] }
    ])));
    let v = assert_success(&result);
    let fields = &v["data"]["fields"];
    assert_eq!(fields["styles_en"]["data-style-source-for"], "[\"body_en\"]");
    assert_eq!(fields["body_en"]["data-style-target-of"], "styles_en");
    assert!(fields.get("body_fr").is_none());
    assert_eq!(v["data"]["media"]["js"], json!([PREVIEW_SCRIPT]));
}

#[test]
fn ffi_stamp_configuration_error() {
    let result = stamp_to_json(&project(json!([
        { "style_field": "missing", "html_fields": [] }
    ])));
    assert_failure(&result);
}

#[test]
fn ffi_rejects_unknown_default_language() {
    let mut doc: Value = serde_json::from_str(&project(json!([]))).unwrap();
    doc["localization"]["default_language"] = json!("de");
    let v = assert_failure(&resolve_to_json(&doc.to_string()));
    assert!(v["error"]
        .as_str()
        .unwrap()
        .contains("default language 'de' is not one of the configured languages"));
}
