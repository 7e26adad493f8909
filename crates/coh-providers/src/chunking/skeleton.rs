//! Top-down skeletonization
//!
//! Rewrites every parent chunk's text in place, replacing each direct
//! child's text with its replacement stub. Parents are processed before
//! their children, so each replacement sees the child's original text.

use std::collections::HashMap;

use tracing::trace;

use coh_domain::{CodeChunk, CommentOptions, Error, Result};

use super::comments::replacement_text;

/// Skeletonize a document's chunk list in place
///
/// Starts at every root (chunk with no parent) and descends. Distinct
/// children of one parent occupy disjoint ranges of the original
/// source, so each child's text occurs exactly once in its parent at
/// replacement time.
pub fn skeletonize(chunks: &mut [CodeChunk], options: &CommentOptions) -> Result<()> {
    let index_by_id: HashMap<String, usize> = chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| (chunk.id.clone(), index))
        .collect();

    let roots: Vec<usize> = chunks
        .iter()
        .enumerate()
        .filter(|(_, chunk)| chunk.is_root())
        .map(|(index, _)| index)
        .collect();

    for root in roots {
        skeletonize_subtree(chunks, &index_by_id, root, options)?;
    }
    Ok(())
}

fn skeletonize_subtree(
    chunks: &mut [CodeChunk],
    index_by_id: &HashMap<String, usize>,
    parent_index: usize,
    options: &CommentOptions,
) -> Result<()> {
    let child_ids: Vec<String> = chunks[parent_index].child_ids().map(str::to_string).collect();

    for child_id in child_ids {
        let child_index = *index_by_id.get(&child_id).ok_or_else(|| {
            Error::structural(format!("child chunk {child_id} missing from chunk list"))
        })?;
        skeletonize_child(chunks, parent_index, child_index, options)?;
        skeletonize_subtree(chunks, index_by_id, child_index, options)?;
    }
    Ok(())
}

/// Replace one child's text inside its parent's text. In-place.
pub fn skeletonize_child(
    chunks: &mut [CodeChunk],
    parent_index: usize,
    child_index: usize,
    options: &CommentOptions,
) -> Result<()> {
    let child_text = chunks[child_index].text.clone();
    let child_id = chunks[child_index].id.clone();

    let parent = &chunks[parent_index];
    if !parent.text.contains(&child_text) {
        return Err(Error::structural(
            "the child text is not contained inside the parent text",
        ));
    }
    if !parent.relationships.has_child(&child_id) {
        return Err(Error::structural(
            "the child chunk is not a child of the parent chunk",
        ));
    }

    let replacement = replacement_text(&chunks[child_index], options)?;

    let parent = &mut chunks[parent_index];
    trace!(parent = %parent.id, child = %child_id, "skeletonizing child");
    parent.text = parent.text.replacen(&child_text, &replacement, 1);
    Ok(())
}
