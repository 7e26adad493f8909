//! Tree-sitter parser adapter
//!
//! Maps a registered language to its grammar and parses source text
//! into a syntax tree, rejecting documents the grammar cannot make
//! sense of.

use tracing::debug;

use coh_domain::{Error, Language, Result};

use crate::language::language_support;

/// Parse `text` with the registered grammar for `language`
///
/// A root whose first child is an `ERROR` node denotes a catastrophic
/// parse failure and rejects the document. Errors deeper in the tree do
/// not.
pub fn parse(language: Language, text: &str) -> Result<tree_sitter::Tree> {
    let support = language_support(language)?;

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&support.grammar())
        .map_err(|e| Error::internal(format!("failed to set tree-sitter language: {e}")))?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| Error::parse_failure(language))?;

    let root = tree.root_node();
    if root.child(0).is_some_and(|first| first.kind() == "ERROR") {
        return Err(Error::parse_failure(language));
    }

    debug!(%language, bytes = text.len(), "parsed document");
    Ok(tree)
}
