//! Domain Layer - code-hierarchy
//!
//! Core entities, value objects, and error types for hierarchical code
//! chunking. This crate has no knowledge of any concrete parser; it only
//! models chunks, the scope chains that contain them, and the per-language
//! options other layers use to extract signatures and build skeleton
//! comments.
//!
//! ## Architecture
//!
//! - `entities` - `CodeChunk` and `SourceDocument`, the records that flow
//!   through the pipeline
//! - `value_objects` - `Language`, `ScopeItem`, signature capture and
//!   comment options
//! - `error` - the error taxonomy shared by all layers
//! - `constants` - domain defaults (minimum chunk size, indent fallbacks)

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{ChunkRelationships, CodeChunk, RelatedChunk, RelationshipKind, SourceDocument};
pub use error::{Error, Result};
pub use value_objects::{
    CommentOptions, Language, ScopeItem, ScopeStyle, SignatureCapture, SignatureCaptureOptions,
    SignatureIdentifiers,
};
