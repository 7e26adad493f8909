//! Scope name and signature extraction
//!
//! Given a scope node and its capture options, finds the scope's display
//! name and the byte-range of its signature. Both searches are pre-order
//! depth-first with first-match-wins; the boundary search considers the
//! node itself, the name search only descendants.

use tree_sitter::Node;

use coh_domain::{ScopeItem, SignatureCapture, SignatureCaptureOptions};

#[derive(Clone, Copy)]
enum Boundary {
    Start,
    End,
}

/// The display name of a scope node: the text of the first descendant
/// whose type equals the configured name identifier, trimmed. Empty
/// when no descendant matches.
pub fn node_name(node: Node<'_>, options: &SignatureCaptureOptions, source: &str) -> String {
    find_name(node, &options.name_identifier, source)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn find_name(node: Node<'_>, name_identifier: &str, source: &str) -> Option<String> {
    for i in 0..node.child_count() as u32 {
        let Some(child) = node.child(i) else { continue };
        if child.kind() == name_identifier {
            return child.utf8_text(source.as_bytes()).ok().map(str::to_string);
        }
        if child.child_count() > 0 {
            if let Some(name) = find_name(child, name_identifier, source) {
                return Some(name);
            }
        }
    }
    None
}

/// The signature text of a scope node, trimmed
///
/// The start byte comes from the first match against the start markers
/// (inclusive match contributes its own start byte, exclusive its end
/// byte); the end byte symmetrically from the end markers. Either side
/// falls back to the node's own boundary when no marker matches.
pub fn node_signature(node: Node<'_>, options: &SignatureCaptureOptions, source: &str) -> String {
    let start = find_boundary(node, &options.start_signature_types, Boundary::Start)
        .unwrap_or_else(|| node.start_byte());
    let end = find_boundary(node, &options.end_signature_types, Boundary::End)
        .unwrap_or_else(|| node.end_byte());

    source.get(start..end).unwrap_or("").trim().to_string()
}

fn find_boundary(node: Node<'_>, markers: &[SignatureCapture], side: Boundary) -> Option<usize> {
    for marker in markers {
        if node.kind() == marker.node_type {
            return Some(match (side, marker.inclusive) {
                (Boundary::Start, true) | (Boundary::End, false) => node.start_byte(),
                (Boundary::Start, false) | (Boundary::End, true) => node.end_byte(),
            });
        }
    }
    for i in 0..node.child_count() as u32 {
        let Some(child) = node.child(i) else { continue };
        if let Some(byte) = find_boundary(child, markers, side) {
            return Some(byte);
        }
    }
    None
}

/// Build the scope chain entry for a scope node
pub fn scope_item(node: Node<'_>, options: &SignatureCaptureOptions, source: &str) -> ScopeItem {
    ScopeItem {
        name: node_name(node, options, source),
        node_type: node.kind().to_string(),
        signature: node_signature(node, options, source),
    }
}
