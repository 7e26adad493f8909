//! Code Chunk Entity
//!
//! The core domain entity: a contiguous slice of source text
//! corresponding to a semantic scope, enriched with its scope chain,
//! byte offsets into the original source, and relationships to the
//! originating document and to other chunks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::METADATA_KEY_FILEPATH;
use crate::value_objects::{Language, ScopeItem};

/// The kind of a relationship attached to a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationshipKind {
    /// The originating document
    Source,
    /// The enclosing chunk
    Parent,
    /// A contained chunk
    Child,
}

/// A reference to a related chunk or document, by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedChunk {
    /// Id of the referenced chunk or document
    pub id: String,
}

impl RelatedChunk {
    /// Create a reference to the given id
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

/// The relationships of one chunk
///
/// A closed record rather than an open map: at most one SOURCE, at most
/// one PARENT, and an ordered list of CHILD references. Parent/child
/// links across a chunk list form a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRelationships {
    /// The originating document, if stamped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RelatedChunk>,
    /// The enclosing chunk, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<RelatedChunk>,
    /// Contained chunks, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RelatedChunk>,
}

impl ChunkRelationships {
    /// All references of the given kind, in order
    pub fn of_kind(&self, kind: RelationshipKind) -> Vec<&RelatedChunk> {
        match kind {
            RelationshipKind::Source => self.source.iter().collect(),
            RelationshipKind::Parent => self.parent.iter().collect(),
            RelationshipKind::Child => self.children.iter().collect(),
        }
    }

    /// Whether `id` is listed as a child
    pub fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|c| c.id == id)
    }
}

/// Core Entity: a semantically meaningful slice of source code
///
/// ## Business Rules
///
/// - A chunk's text originates from exactly one source document
/// - `inclusive_scopes` lists the enclosing scope chain outermost first,
///   with the chunk's own scope appended last for non-root chunks
/// - `start_byte <= end_byte`, both within the source length; before
///   skeletonization the text equals `source[start_byte..end_byte]`
///   (possibly extended leftward across spaces and tabs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeChunk {
    /// Unique identifier for this chunk
    pub id: String,
    /// The chunk text; rewritten in place by the skeletonizer
    pub text: String,
    /// Programming language of the source document
    pub language: Language,
    /// Enclosing scope chain, outermost first, self last
    pub inclusive_scopes: Vec<ScopeItem>,
    /// Start byte offset into the original source
    pub start_byte: usize,
    /// End byte offset into the original source
    pub end_byte: usize,
    /// Pass-through metadata inherited from the document
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// SOURCE / PARENT / CHILD relationships
    #[serde(default)]
    pub relationships: ChunkRelationships,
}

impl CodeChunk {
    /// Create a chunk with a fresh id and no relationships
    pub fn new(
        text: String,
        language: Language,
        inclusive_scopes: Vec<ScopeItem>,
        start_byte: usize,
        end_byte: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            language,
            inclusive_scopes,
            start_byte,
            end_byte,
            metadata: Map::new(),
            relationships: ChunkRelationships::default(),
        }
    }

    /// A reference to this chunk for use in another chunk's relationships
    pub fn related_info(&self) -> RelatedChunk {
        RelatedChunk::new(self.id.clone())
    }

    /// The innermost scope entry (the chunk's own scope), if any
    pub fn innermost_scope(&self) -> Option<&ScopeItem> {
        self.inclusive_scopes.last()
    }

    /// Id of the enclosing chunk, if any
    pub fn parent_id(&self) -> Option<&str> {
        self.relationships.parent.as_ref().map(|r| r.id.as_str())
    }

    /// Id of the originating document, if stamped
    pub fn source_id(&self) -> Option<&str> {
        self.relationships.source.as_ref().map(|r| r.id.as_str())
    }

    /// Ids of contained chunks, in source order
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships.children.iter().map(|c| c.id.as_str())
    }

    /// Whether this chunk has no enclosing chunk
    pub fn is_root(&self) -> bool {
        self.relationships.parent.is_none()
    }

    /// The originating file path, if present in metadata
    pub fn filepath(&self) -> Option<&str> {
        self.metadata.get(METADATA_KEY_FILEPATH).and_then(Value::as_str)
    }

    /// Merge document metadata at low precedence: keys already present
    /// on the chunk are never clobbered
    pub fn merge_document_metadata(&mut self, document_metadata: &Map<String, Value>) {
        for (key, value) in document_metadata {
            self.metadata
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}
