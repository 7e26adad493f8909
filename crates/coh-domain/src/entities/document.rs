//! Source Document Entity
//!
//! The input record of the pipeline: source text plus pass-through
//! metadata. Chunks produced from a document carry a SOURCE relationship
//! back to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::METADATA_KEY_FILEPATH;
use crate::entities::chunk::RelatedChunk;

/// A source file to be chunked
///
/// `metadata` is passed through to every produced chunk; it must include
/// `filepath` for the hierarchy view to work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Unique identifier for this document
    pub id: String,
    /// The full source text
    pub text: String,
    /// Pass-through metadata (string keys to JSON values)
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl SourceDocument {
    /// Create a document with a fresh id and empty metadata
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            metadata: Map::new(),
        }
    }

    /// Attach metadata, replacing any existing map
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach a `filepath` metadata entry
    pub fn with_filepath<S: Into<String>>(mut self, filepath: S) -> Self {
        self.metadata.insert(
            METADATA_KEY_FILEPATH.to_string(),
            Value::String(filepath.into()),
        );
        self
    }

    /// The `filepath` metadata entry, if present
    pub fn filepath(&self) -> Option<&str> {
        self.metadata.get(METADATA_KEY_FILEPATH).and_then(Value::as_str)
    }

    /// A reference to this document for use in a chunk's SOURCE
    /// relationship
    pub fn related_info(&self) -> RelatedChunk {
        RelatedChunk::new(self.id.clone())
    }
}
