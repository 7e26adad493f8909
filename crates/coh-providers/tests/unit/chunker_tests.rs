//! Unit tests for the hierarchical chunker

use coh_domain::{CodeChunk, Language};
use coh_providers::chunking::parser;
use coh_providers::chunking::traverser::HierarchicalChunker;
use coh_providers::language::signature_identifiers;

const PYTHON_CLASS: &str = "class A:\n    def f(self):\n        return 1\n";

fn chunk_python(source: &str, min_characters: usize) -> Vec<CodeChunk> {
    let tree = parser::parse(Language::Python, source).unwrap();
    let identifiers = signature_identifiers(Language::Python).unwrap();
    let chunker = HierarchicalChunker::new(source, Language::Python, identifiers, min_characters);
    chunker.chunk(tree.root_node()).unwrap()
}

#[test]
fn test_class_and_method_chunks() {
    let chunks = chunk_python(PYTHON_CLASS, 1);
    assert_eq!(chunks.len(), 3);

    let root = &chunks[0];
    assert_eq!(root.text, PYTHON_CLASS);
    assert!(root.inclusive_scopes.is_empty());
    assert!(root.is_root());

    let class_chunk = &chunks[1];
    assert_eq!(class_chunk.text, "class A:\n    def f(self):\n        return 1");
    assert_eq!(class_chunk.inclusive_scopes.len(), 1);
    let class_scope = &class_chunk.inclusive_scopes[0];
    assert_eq!(class_scope.name, "A");
    assert_eq!(class_scope.node_type, "class_definition");
    assert_eq!(class_scope.signature, "class A:");
    assert_eq!(class_chunk.parent_id(), Some(root.id.as_str()));
    assert!(root.relationships.has_child(&class_chunk.id));

    let method_chunk = &chunks[2];
    assert_eq!(method_chunk.text, "    def f(self):\n        return 1");
    let scope_names: Vec<&str> = method_chunk
        .inclusive_scopes
        .iter()
        .map(|scope| scope.name.as_str())
        .collect();
    assert_eq!(scope_names, vec!["A", "f"]);
    assert_eq!(method_chunk.parent_id(), Some(class_chunk.id.as_str()));
    assert!(class_chunk.relationships.has_child(&method_chunk.id));
}

#[test]
fn test_byte_ranges_and_whitespace_extension() {
    let chunks = chunk_python(PYTHON_CLASS, 1);

    let root = &chunks[0];
    assert_eq!((root.start_byte, root.end_byte), (0, PYTHON_CLASS.len()));

    let class_chunk = &chunks[1];
    assert_eq!((class_chunk.start_byte, class_chunk.end_byte), (0, 42));

    // The method chunk starts at the true line indent, not at `def`
    let method_chunk = &chunks[2];
    assert_eq!((method_chunk.start_byte, method_chunk.end_byte), (9, 42));
    assert_eq!(&PYTHON_CLASS[method_chunk.start_byte..method_chunk.end_byte], method_chunk.text);

    // Child ranges are contained in their parent's range
    assert!(method_chunk.start_byte >= class_chunk.start_byte);
    assert!(method_chunk.end_byte <= class_chunk.end_byte);

    // Chunk texts begin at a line boundary
    for chunk in &chunks {
        assert!(
            chunk.start_byte == 0
                || PYTHON_CLASS.as_bytes()[chunk.start_byte - 1] == b'\n'
        );
    }
}

#[test]
fn test_decorated_function_floats_up() {
    let source = "@app.route('/x')\ndef handler(request):\n    return respond(request)\n";
    let chunks = chunk_python(source, 1);

    // decorated_definition is not a scope: the function attaches to the
    // nearest enclosing scope chunk, the root
    assert_eq!(chunks.len(), 2);
    let handler = &chunks[1];
    assert_eq!(handler.inclusive_scopes.len(), 1);
    assert_eq!(handler.inclusive_scopes[0].name, "handler");
    assert_eq!(handler.parent_id(), Some(chunks[0].id.as_str()));
}

#[test]
fn test_minimum_size_gate() {
    let source = "def f():\n    return 1\n";
    let chunks = chunk_python(source, 80);

    // The function is shorter than the gate; only the root survives
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, source);

    let chunks = chunk_python(source, 1);
    assert_eq!(chunks.len(), 2);
    for chunk in &chunks[1..] {
        assert!(chunk.text.len() >= 1);
    }
}

#[test]
fn test_forest_integrity() {
    let source = "def first():\n    return 1\n\n\ndef second():\n    return 2\n";
    let chunks = chunk_python(source, 1);
    assert_eq!(chunks.len(), 3);

    for chunk in &chunks {
        match chunk.parent_id() {
            None => assert!(chunk.inclusive_scopes.is_empty()),
            Some(parent_id) => {
                let parent = chunks.iter().find(|c| c.id == parent_id).unwrap();
                let listed = parent.child_ids().filter(|id| *id == chunk.id).count();
                assert_eq!(listed, 1, "child appears exactly once in parent's list");

                // Scope chain = parent chain + one entry
                assert_eq!(chunk.inclusive_scopes.len(), parent.inclusive_scopes.len() + 1);
                assert_eq!(
                    &chunk.inclusive_scopes[..parent.inclusive_scopes.len()],
                    &parent.inclusive_scopes[..]
                );
            }
        }
    }
}

#[test]
fn test_walk_order_is_root_first() {
    let chunks = chunk_python(PYTHON_CLASS, 1);
    assert!(chunks[0].is_root());
    // Children come after their parents
    for (index, chunk) in chunks.iter().enumerate() {
        if let Some(parent_id) = chunk.parent_id() {
            let parent_index = chunks.iter().position(|c| c.id == parent_id).unwrap();
            assert!(parent_index < index);
        }
    }
}
