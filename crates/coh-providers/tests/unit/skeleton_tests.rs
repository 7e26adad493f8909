//! Unit tests for skeletonization

use coh_application::ChunkerConfig;
use coh_domain::{CodeChunk, Error, Language, ScopeItem, SourceDocument};
use coh_providers::chunking::skeleton::skeletonize_child;
use coh_providers::language::comment_options;
use coh_providers::HierarchyChunkerEngine;

fn chunk_with_skeleton(source: &str, language: Language) -> Vec<CodeChunk> {
    let document = SourceDocument::new(source).with_filepath("src/sample");
    let config = ChunkerConfig::new(language).with_chunk_min_characters(1);
    HierarchyChunkerEngine::new()
        .chunk_document_sync(&document, &config)
        .unwrap()
}

fn find_by_scope<'a>(chunks: &'a [CodeChunk], name: &str) -> &'a CodeChunk {
    chunks
        .iter()
        .find(|chunk| chunk.innermost_scope().is_some_and(|scope| scope.name == name))
        .unwrap()
}

#[test]
fn test_python_skeleton() {
    let chunks = chunk_with_skeleton("class A:\n    def f(self):\n        return 1\n", Language::Python);

    let class_chunk = find_by_scope(&chunks, "A");
    let method_chunk = find_by_scope(&chunks, "f");

    let stub = format!(
        "    def f(self):\n        # Code replaced for brevity. See node_id {}",
        method_chunk.id
    );
    assert!(class_chunk.text.contains(&stub), "got: {}", class_chunk.text);
    assert!(!class_chunk.text.contains("return 1"));

    // The stub appears exactly once
    let marker = format!("See node_id {}", method_chunk.id);
    assert_eq!(class_chunk.text.matches(&marker).count(), 1);

    // The child itself keeps its original body
    assert!(method_chunk.text.contains("return 1"));

    // The root shows the class stub, not the class body
    let root = chunks.iter().find(|chunk| chunk.is_root()).unwrap();
    let root_marker = format!("See node_id {}", class_chunk.id);
    assert!(root.text.contains(&root_marker));
    assert!(!root.text.contains("def f"));
}

#[test]
fn test_cpp_skeleton() {
    let chunks = chunk_with_skeleton("class A {\n  void f() { return; }\n};\n", Language::Cpp);

    let class_chunk = find_by_scope(&chunks, "A");
    let method_chunk = find_by_scope(&chunks, "f()");

    let stub = format!(
        "  void f() {{\n    // Code replaced for brevity. See node_id {}\n  }}",
        method_chunk.id
    );
    assert!(class_chunk.text.contains(&stub), "got: {}", class_chunk.text);
    assert!(!class_chunk.text.contains("return;"));
}

#[test]
fn test_skeleton_can_be_disabled() {
    let source = "class A:\n    def f(self):\n        return 1\n";
    let document = SourceDocument::new(source).with_filepath("src/sample.py");
    let config = ChunkerConfig::new(Language::Python)
        .with_chunk_min_characters(1)
        .with_skeleton(false);
    let chunks = HierarchyChunkerEngine::new()
        .chunk_document_sync(&document, &config)
        .unwrap();

    let class_chunk = find_by_scope(&chunks, "A");
    assert!(class_chunk.text.contains("return 1"));
    assert!(!class_chunk.text.contains("Code replaced for brevity"));
}

fn linked_pair(parent_text: &str, child_text: &str) -> Vec<CodeChunk> {
    let mut parent = CodeChunk::new(parent_text.to_string(), Language::Python, vec![], 0, 0);
    let mut child = CodeChunk::new(
        child_text.to_string(),
        Language::Python,
        vec![ScopeItem {
            name: "f".to_string(),
            node_type: "function_definition".to_string(),
            signature: "def f():".to_string(),
        }],
        0,
        0,
    );
    parent.relationships.children.push(child.related_info());
    child.relationships.parent = Some(parent.related_info());
    vec![parent, child]
}

#[test]
fn test_child_text_must_be_contained() {
    let mut chunks = linked_pair("def g():\n    pass", "def f():\n    pass");
    let options = comment_options(Language::Python).unwrap();

    let err = skeletonize_child(&mut chunks, 0, 1, options).unwrap_err();
    assert!(matches!(err, Error::StructuralViolation { .. }));
}

#[test]
fn test_child_must_be_listed_in_parent() {
    let mut chunks = linked_pair("before\ndef f():\n    pass", "def f():\n    pass");
    // Break the CHILD listing while keeping the text containment
    chunks[0].relationships.children.clear();
    let options = comment_options(Language::Python).unwrap();

    let err = skeletonize_child(&mut chunks, 0, 1, options).unwrap_err();
    assert!(matches!(err, Error::StructuralViolation { .. }));
}
