//! Secondary Splitter Port
//!
//! An optional collaborator invoked after chunking and skeletonization.
//! It splits one chunk's text into smaller windows; the engine turns the
//! windows back into chunks, threads them together with pointer comments,
//! and rewires relationships so external references stay valid.

use std::sync::Arc;

/// Splits a chunk's text into an ordered sequence of smaller windows
///
/// Returning zero or one window leaves the chunk untouched. Window
/// boundaries are the splitter's business; relationship bookkeeping is
/// the engine's.
pub trait SecondarySplitter: Send + Sync {
    /// Split `text` into ordered windows whose concatenation covers it
    fn split(&self, text: &str) -> Vec<String>;
}

/// Shared secondary splitter handle
pub type SharedSecondarySplitter = Arc<dyn SecondarySplitter>;
