//! Domain Entities
//!
//! Records with identity that flow through the chunking pipeline:
//! the source document going in and the code chunks coming out.

/// Code chunk entity and its relationship records
pub mod chunk;
/// Source document entity
pub mod document;

pub use chunk::{ChunkRelationships, CodeChunk, RelatedChunk, RelationshipKind};
pub use document::SourceDocument;
