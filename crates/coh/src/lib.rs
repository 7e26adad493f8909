//! # code-hierarchy
//!
//! Hierarchical code chunking for retrieval-augmented reasoning.
//!
//! Source files are parsed into a concrete syntax tree and split along
//! scope boundaries (functions, methods, classes, HTML elements). Each
//! chunk carries its enclosing scope chain and parent/child links to the
//! chunks around it; optionally, parent chunks are *skeletonized* so a
//! reader sees one level of detail at a time and can descend by chunk
//! id.
//!
//! ## Example
//!
//! ```no_run
//! use coh::application::ChunkerConfig;
//! use coh::application::HierarchyChunker;
//! use coh::domain::{Language, SourceDocument};
//! use coh::providers::HierarchyChunkerEngine;
//!
//! # async fn example() -> coh::domain::Result<()> {
//! let document = SourceDocument::new("class A:\n    def f(self):\n        return 1\n")
//!     .with_filepath("src/a.py");
//!
//! let engine = HierarchyChunkerEngine::new();
//! let config = ChunkerConfig::new(Language::Python);
//! let chunks = engine.chunk_document(&document, &config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - chunk and document entities, scope value objects, errors
//! - `application` - chunker/splitter ports and the hierarchy view
//! - `providers` - language registry, tree-sitter engine, skeletonizer

/// Domain layer - entities, value objects, and errors
pub mod domain {
    pub use coh_domain::*;
}

/// Application layer - ports and the hierarchy view
pub mod application {
    pub use coh_application::*;
}

/// Provider layer - the engine, language registry, and splitters
pub mod providers {
    pub use coh_providers::*;
}
