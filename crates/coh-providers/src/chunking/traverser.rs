//! The recursive scope-selecting tree walk
//!
//! Walks a syntax tree and produces the flat, tree-walk-ordered chunk
//! list with parent/child links attached. Chunks produced below
//! non-scope structural nodes float up to the nearest enclosing scope
//! chunk.

use tracing::trace;
use tree_sitter::Node;

use coh_domain::{CodeChunk, Error, Language, Result, ScopeItem, SignatureIdentifiers};

use super::signature::scope_item;

/// What one `chunk_node` call hands back to its caller: the chunk made
/// for this node (if any) and the descendants still looking for a
/// parent. The two are exclusive: a node that made a chunk has already
/// adopted everything below it.
#[derive(Debug, Default)]
struct NodeOutput {
    this_document: Option<usize>,
    upstream_children: Vec<usize>,
}

/// Recursive hierarchical chunker for one parsed document
pub struct HierarchicalChunker<'a> {
    source: &'a str,
    language: Language,
    identifiers: &'a SignatureIdentifiers,
    min_characters: usize,
}

impl<'a> HierarchicalChunker<'a> {
    /// Create a chunker over one document's source text
    pub fn new(
        source: &'a str,
        language: Language,
        identifiers: &'a SignatureIdentifiers,
        min_characters: usize,
    ) -> Self {
        Self {
            source,
            language,
            identifiers,
            min_characters,
        }
    }

    /// Chunk the tree rooted at `root`
    ///
    /// Returns the flat chunk list in walk order: root first, then each
    /// parent's children in source order. The root node always produces
    /// a chunk, whether or not its type is a scope type.
    pub fn chunk(&self, root: Node<'a>) -> Result<Vec<CodeChunk>> {
        let mut chunks = Vec::new();
        let output = self.chunk_node(root, &mut chunks, Vec::new(), true)?;
        if output.this_document.is_none() {
            return Err(Error::internal("root node must produce a chunk"));
        }
        Ok(chunks)
    }

    fn chunk_node(
        &self,
        node: Node<'a>,
        chunks: &mut Vec<CodeChunk>,
        mut context: Vec<ScopeItem>,
        is_root: bool,
    ) -> Result<NodeOutput> {
        // Capture any whitespace before the node's start byte. Very
        // important for space-sensitive languages like Python.
        let bytes = self.source.as_bytes();
        let mut start_byte = node.start_byte();
        while start_byte > 0 && matches!(bytes[start_byte - 1], b' ' | b'\t') {
            start_byte -= 1;
        }
        let current_text = &self.source[start_byte..node.end_byte()];

        // Too small to stand alone; the root is exempt
        if !is_root && current_text.len() < self.min_characters {
            return Ok(NodeOutput::default());
        }

        // A breakpoint on node.kind() here is the fastest way to learn a
        // new grammar's node types and hierarchy.
        let scope_options = if is_root {
            None
        } else {
            self.identifiers.get(node.kind())
        };

        let this_document = if is_root || scope_options.is_some() {
            if let Some(options) = scope_options {
                context.push(scope_item(node, options, self.source));
            }
            trace!(kind = node.kind(), start_byte, "creating chunk");
            chunks.push(CodeChunk::new(
                current_text.to_string(),
                self.language,
                context.clone(),
                start_byte,
                node.end_byte(),
            ));
            Some(chunks.len() - 1)
        } else {
            None
        };

        let mut upstream_children: Vec<usize> = Vec::new();

        for i in 0..node.child_count() as u32 {
            let Some(child) = node.child(i) else { continue };
            // Leaf tokens cannot start a scope
            if child.child_count() == 0 {
                continue;
            }

            // Each sibling branch gets its own copy of the scope chain
            let next = self.chunk_node(child, chunks, context.clone(), false)?;

            if let Some(parent_index) = this_document {
                // This node is a chunk: adopt whatever the child branch
                // produced
                if let Some(child_index) = next.this_document {
                    if !next.upstream_children.is_empty() {
                        return Err(Error::internal(
                            "this_document and upstream_children are exclusive",
                        ));
                    }
                    Self::attach(chunks, parent_index, child_index);
                } else {
                    for child_index in next.upstream_children {
                        Self::attach(chunks, parent_index, child_index);
                    }
                }
            } else if let Some(child_index) = next.this_document {
                if !next.upstream_children.is_empty() {
                    return Err(Error::internal(
                        "this_document and upstream_children are exclusive",
                    ));
                }
                // Not a chunk ourselves: the child floats up to the
                // nearest enclosing scope chunk
                upstream_children.push(child_index);
            } else {
                upstream_children.extend(next.upstream_children);
            }
        }

        Ok(NodeOutput {
            this_document,
            upstream_children,
        })
    }

    fn attach(chunks: &mut [CodeChunk], parent_index: usize, child_index: usize) {
        let parent_ref = chunks[parent_index].related_info();
        let child_ref = chunks[child_index].related_info();
        chunks[parent_index].relationships.children.push(child_ref);
        chunks[child_index].relationships.parent = Some(parent_ref);
    }
}
