//! Application Services
//!
//! Pure services over chunk lists; no parsing, no I/O.

/// Code hierarchy view over a chunk list
pub mod hierarchy;

pub use hierarchy::{code_hierarchy, hierarchy_markdown, HierarchyTree};
