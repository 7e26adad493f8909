//! Code Hierarchy View
//!
//! Builds a nested mapping of a chunk list, keyed by filepath components
//! and then by scope names, plus a Markdown rendering of that mapping.
//! Useful as a tool description or context block that makes code easier
//! to search for.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use coh_domain::{CodeChunk, Error, Result};

/// A nested name mapping: filepath components first, scope names below
///
/// Keys are ordered; building the view twice over the same chunks yields
/// an equal tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyTree {
    #[serde(flatten)]
    children: BTreeMap<String, HierarchyTree>,
}

impl HierarchyTree {
    /// Child subtrees, ordered by name
    pub fn children(&self) -> &BTreeMap<String, HierarchyTree> {
        &self.children
    }

    /// Whether this node has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The subtree at `path`, created on demand along with every
    /// intermediate node
    fn subtree_mut(&mut self, path: &[String]) -> &mut HierarchyTree {
        let mut node = self;
        for key in path {
            node = node.children.entry(key.clone()).or_default();
        }
        node
    }

    /// Render the tree as Markdown: two-space indent per level, one
    /// `- name` line per node
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        self.render(0, &mut out);
        out
    }

    fn render(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        for (name, subtree) in &self.children {
            out.push_str(&indent);
            out.push_str("- ");
            out.push_str(name);
            out.push('\n');
            subtree.render(depth + 1, out);
        }
    }
}

/// Build the hierarchy view for a chunk list
///
/// Every chunk must carry a `filepath` metadata entry. The final path
/// component is stripped of its extension. `max_depth` counts scope
/// entries per chunk; `-1` means unlimited, otherwise entries stop being
/// added past the limit.
pub fn code_hierarchy(chunks: &[CodeChunk], max_depth: i64) -> Result<HierarchyTree> {
    let mut out = HierarchyTree::default();

    for chunk in chunks {
        let filepath = chunk
            .filepath()
            .ok_or_else(|| Error::invalid_argument("filepath not in chunk metadata"))?;

        let mut path: Vec<String> = filepath.split('/').map(str::to_string).collect();
        if let Some(last) = path.last_mut() {
            *last = last.split('.').next().unwrap_or("").to_string();
        }

        for (i, scope) in chunk.inclusive_scopes.iter().enumerate() {
            if max_depth != -1 && i as i64 > max_depth {
                break;
            }
            path.push(scope.name.clone());
            out.subtree_mut(&path);
        }
    }

    debug!(chunks = chunks.len(), "built code hierarchy view");
    Ok(out)
}

/// Build the hierarchy view and its Markdown rendering in one call
pub fn hierarchy_markdown(chunks: &[CodeChunk], max_depth: i64) -> Result<(HierarchyTree, String)> {
    let tree = code_hierarchy(chunks, max_depth)?;
    let markdown = tree.to_markdown();
    Ok((tree, markdown))
}
