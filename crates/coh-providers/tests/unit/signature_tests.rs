//! Unit tests for scope name and signature extraction

use tree_sitter::Node;

use coh_domain::{Language, SignatureCaptureOptions};
use coh_providers::chunking::parser;
use coh_providers::chunking::signature::{node_name, node_signature};
use coh_providers::language::signature_identifiers;

fn find_node<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    if node.kind() == kind {
        return Some(node);
    }
    for i in 0..node.child_count() as u32 {
        if let Some(found) = node.child(i).and_then(|child| find_node(child, kind)) {
            return Some(found);
        }
    }
    None
}

#[test]
fn test_python_function_signature() {
    let source = "def greet(name):\n    return name\n";
    let tree = parser::parse(Language::Python, source).unwrap();
    let node = find_node(tree.root_node(), "function_definition").unwrap();
    let options = &signature_identifiers(Language::Python).unwrap()["function_definition"];

    assert_eq!(node_name(node, options, source), "greet");
    assert_eq!(node_signature(node, options, source), "def greet(name):");
}

#[test]
fn test_python_class_signature() {
    let source = "class A:\n    def f(self):\n        return 1\n";
    let tree = parser::parse(Language::Python, source).unwrap();
    let node = find_node(tree.root_node(), "class_definition").unwrap();
    let options = &signature_identifiers(Language::Python).unwrap()["class_definition"];

    assert_eq!(node_name(node, options, source), "A");
    assert_eq!(node_signature(node, options, source), "class A:");
}

#[test]
fn test_html_element_signature_includes_closing_angle() {
    let source = "<div id=\"x\">hi</div>";
    let tree = parser::parse(Language::Html, source).unwrap();
    let node = find_node(tree.root_node(), "element").unwrap();
    let options = &signature_identifiers(Language::Html).unwrap()["element"];

    assert_eq!(node_name(node, options, source), "div");
    assert_eq!(node_signature(node, options, source), "<div id=\"x\">");
}

#[test]
fn test_cpp_function_signature_excludes_body() {
    let source = "int add(int a, int b) {\n  return a + b;\n}\n";
    let tree = parser::parse(Language::Cpp, source).unwrap();
    let node = find_node(tree.root_node(), "function_definition").unwrap();
    let options = &signature_identifiers(Language::Cpp).unwrap()["function_definition"];

    assert_eq!(node_name(node, options, source), "add(int a, int b)");
    assert_eq!(node_signature(node, options, source), "int add(int a, int b)");
}

#[test]
fn test_signature_falls_back_to_node_boundaries() {
    let source = "def greet(name):\n    return name\n";
    let tree = parser::parse(Language::Python, source).unwrap();
    let node = find_node(tree.root_node(), "function_definition").unwrap();
    // No markers at all: the signature spans the whole node
    let options = SignatureCaptureOptions::named("identifier");

    assert_eq!(
        node_signature(node, &options, source),
        "def greet(name):\n    return name"
    );
}

#[test]
fn test_missing_name_identifier_yields_empty_name() {
    let source = "def greet(name):\n    return name\n";
    let tree = parser::parse(Language::Python, source).unwrap();
    let node = find_node(tree.root_node(), "function_definition").unwrap();
    let options = SignatureCaptureOptions::named("no_such_node_type");

    assert_eq!(node_name(node, &options, source), "");
}
