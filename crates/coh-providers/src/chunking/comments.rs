//! Comment and replacement-text helpers for skeletonization
//!
//! Pure functions over a chunk and a language's comment options. The
//! replacement stub is what a parent chunk shows in place of a child's
//! body: the child's signature plus a pointer comment naming the child
//! chunk's id.

use coh_domain::{CodeChunk, CommentOptions, Error, Result, ScopeStyle};

use super::indentation::{analyze, Indentation};

/// The natural-language text of a skeleton pointer comment
pub fn comment_text(chunk: &CodeChunk) -> String {
    format!("Code replaced for brevity. See node_id {}", chunk.id)
}

/// A full comment line pointing at `chunk`, newline-terminated
///
/// Indented at `indent_level` when given, otherwise one level deeper
/// than the chunk text's first line.
pub fn comment_line(
    chunk: &CodeChunk,
    options: &CommentOptions,
    indent_level: Option<usize>,
) -> Result<String> {
    let indentation = analyze(&chunk.text)?;
    let level = indent_level.unwrap_or(indentation.first_line_level + 1);
    let indent = indent_string(&indentation, level);
    Ok(format!("{indent}{}\n", options.render(&comment_text(chunk))))
}

/// The text a parent substitutes for `child` during skeletonization
///
/// Brackets style closes the stub with `}` at the signature's level;
/// indentation style leaves the comment as the scoped body.
pub fn replacement_text(child: &CodeChunk, options: &CommentOptions) -> Result<String> {
    let signature = child
        .innermost_scope()
        .map(|scope| scope.signature.as_str())
        .ok_or_else(|| Error::structural("child chunk has no scope entry"))?;

    let indentation = analyze(&child.text)?;
    let level = indentation.first_line_level;
    let comment = options.render(&comment_text(child));

    let mut replacement = format!("{}{signature}", indent_string(&indentation, level));
    match options.scope_style {
        ScopeStyle::Brackets => {
            replacement.push_str(" {\n");
            replacement.push_str(&indent_string(&indentation, level + 1));
            replacement.push_str(&comment);
            replacement.push('\n');
            replacement.push_str(&indent_string(&indentation, level));
            replacement.push('}');
        }
        ScopeStyle::Indentation => {
            replacement.push('\n');
            replacement.push_str(&indent_string(&indentation, level + 1));
            replacement.push_str(&comment);
        }
    }

    Ok(replacement)
}

fn indent_string(indentation: &Indentation, level: usize) -> String {
    indentation
        .indent_char
        .to_string()
        .repeat(indentation.count_per_level * level)
}
