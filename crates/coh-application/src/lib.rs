//! Application Layer - code-hierarchy
//!
//! Ports and services that orchestrate domain entities without touching
//! any concrete parser.
//!
//! ## Ports (Interfaces)
//!
//! - [`ports::chunking::HierarchyChunker`] - the chunking engine contract
//! - [`ports::splitting::SecondarySplitter`] - optional post-chunking
//!   line/character splitter
//!
//! ## Services
//!
//! - [`services::hierarchy`] - the code hierarchy view (nested mapping +
//!   Markdown rendering)
//!
//! ## Dependencies
//!
//! This crate depends only on `coh-domain` and pure Rust libraries for
//! async and serialization.

pub mod ports;
pub mod services;

pub use ports::chunking::{ChunkerConfig, HierarchyChunker, SharedHierarchyChunker};
pub use ports::splitting::{SecondarySplitter, SharedSecondarySplitter};
pub use services::hierarchy::{code_hierarchy, hierarchy_markdown, HierarchyTree};
