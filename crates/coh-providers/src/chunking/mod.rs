//! Hierarchical chunking pipeline
//!
//! The stages, in data-flow order: `parser` turns text into a syntax
//! tree, `traverser` selects scope nodes and links chunks into a forest
//! (using `signature` for names and signature byte-ranges), `skeleton`
//! rewrites parent chunks (using `indentation` and `comments`), and
//! `engine` ties the stages together behind the application port.

/// Pure comment and replacement-text helpers
pub mod comments;
/// The engine implementing the hierarchy chunker port
pub mod engine;
/// Indentation analysis for skeleton stubs
pub mod indentation;
/// Tree-sitter parser adapter
pub mod parser;
/// Scope name and signature extraction
pub mod signature;
/// Top-down skeletonization of parent chunks
pub mod skeleton;
/// The recursive scope-selecting tree walk
pub mod traverser;

pub use engine::HierarchyChunkerEngine;
pub use indentation::Indentation;
pub use traverser::HierarchicalChunker;
