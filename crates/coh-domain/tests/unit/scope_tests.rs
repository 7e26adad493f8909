//! Unit tests for scope value objects

use coh_domain::{CommentOptions, ScopeItem, ScopeStyle, SignatureCapture, SignatureCaptureOptions};
use serde_json::json;

#[test]
fn test_signature_capture_constructors() {
    let inclusive = SignatureCapture::inclusive(">");
    assert_eq!(inclusive.node_type, ">");
    assert!(inclusive.inclusive);

    let exclusive = SignatureCapture::exclusive("block");
    assert_eq!(exclusive.node_type, "block");
    assert!(!exclusive.inclusive);
}

#[test]
fn test_capture_options_builder() {
    let options = SignatureCaptureOptions::named("identifier")
        .with_start(vec![SignatureCapture::inclusive("<")])
        .with_end(vec![SignatureCapture::inclusive(">")]);

    assert_eq!(options.name_identifier, "identifier");
    assert_eq!(options.start_signature_types.len(), 1);
    assert_eq!(options.end_signature_types.len(), 1);

    let bare = SignatureCaptureOptions::named("tag_name");
    assert!(bare.start_signature_types.is_empty());
    assert!(bare.end_signature_types.is_empty());
}

#[test]
fn test_comment_options_render() {
    let slashes = CommentOptions::new("// {}", ScopeStyle::Brackets);
    assert_eq!(slashes.render("hello"), "// hello");

    let hash = CommentOptions::new("# {}", ScopeStyle::Indentation);
    assert_eq!(hash.render("hello"), "# hello");

    let html = CommentOptions::new("<!-- {} -->", ScopeStyle::Indentation);
    assert_eq!(html.render("hello"), "<!-- hello -->");
}

#[test]
fn test_scope_item_serializes_type_tag() {
    let item = ScopeItem {
        name: "A".to_string(),
        node_type: "class_definition".to_string(),
        signature: "class A:".to_string(),
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value,
        json!({"name": "A", "type": "class_definition", "signature": "class A:"})
    );
}
