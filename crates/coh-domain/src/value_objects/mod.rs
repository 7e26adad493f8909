//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Language`] | Programming language identifier |
//! | [`ScopeItem`] | One entry of a chunk's enclosing-scope chain |
//! | [`SignatureCaptureOptions`] | How to find a scope's name and signature |
//! | [`CommentOptions`] | How to write a skeleton comment for a language |

/// Programming language identifier
pub mod language;
/// Scope chain, signature capture, and comment option value objects
pub mod scope;

pub use language::Language;
pub use scope::{
    CommentOptions, ScopeItem, ScopeStyle, SignatureCapture, SignatureCaptureOptions,
    SignatureIdentifiers,
};
