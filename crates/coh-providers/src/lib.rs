//! Provider Layer - code-hierarchy
//!
//! Concrete implementations behind the application ports: the language
//! registry, the tree-sitter parser adapter, the hierarchical chunker,
//! the indentation analyzer, the skeletonizer, and a line-window
//! secondary splitter.
//!
//! ## Modules
//!
//! - `language` - the language registry: one module per language holding
//!   its signature identifier table and comment options
//! - `chunking` - the chunking pipeline: parser adapter, signature
//!   extraction, recursive traversal, indentation analysis,
//!   skeletonization, and the engine tying them together
//! - `splitting` - secondary splitter implementations

pub mod chunking;
pub mod language;
pub mod splitting;

pub use chunking::engine::HierarchyChunkerEngine;
pub use language::{comment_options, language_support, signature_identifiers, supported_languages};
pub use splitting::LineWindowSplitter;
