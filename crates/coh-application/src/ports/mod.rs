//! Application Ports
//!
//! Contracts for the concrete implementations provided by the providers
//! layer.

/// Hierarchy chunking engine port and its configuration
pub mod chunking;
/// Secondary splitter port
pub mod splitting;

pub use chunking::{ChunkerConfig, HierarchyChunker, SharedHierarchyChunker};
pub use splitting::{SecondarySplitter, SharedSecondarySplitter};
