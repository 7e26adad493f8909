//! Hierarchy Chunker Port
//!
//! Defines the business contract for hierarchical code chunking. The
//! engine behind this port parses a document into a syntax tree, selects
//! scope-defining nodes, links the resulting chunks into a forest, and
//! optionally skeletonizes parent chunks.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use coh_domain::constants::DEFAULT_CHUNK_MIN_CHARACTERS;
use coh_domain::{CodeChunk, Language, Result, SignatureIdentifiers, SourceDocument};

/// Options for one chunking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Language of the documents to chunk; must be present in the
    /// language registry
    pub language: Language,
    /// Whether parent chunks have each child's text replaced with a
    /// signature stub pointing at the child chunk
    pub skeleton: bool,
    /// Minimum number of characters per non-root chunk
    pub chunk_min_characters: usize,
    /// Optional override of the registry's signature identifier table
    /// for this run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_identifiers: Option<SignatureIdentifiers>,
}

impl ChunkerConfig {
    /// Default options for a language: skeleton on, registry tables,
    /// default minimum chunk size
    pub fn new(language: Language) -> Self {
        Self {
            language,
            skeleton: true,
            chunk_min_characters: DEFAULT_CHUNK_MIN_CHARACTERS,
            signature_identifiers: None,
        }
    }

    /// Toggle skeletonization
    pub fn with_skeleton(mut self, skeleton: bool) -> Self {
        self.skeleton = skeleton;
        self
    }

    /// Set the minimum chunk size gate
    pub fn with_chunk_min_characters(mut self, chunk_min_characters: usize) -> Self {
        self.chunk_min_characters = chunk_min_characters;
        self
    }

    /// Override the signature identifier table for this run
    pub fn with_signature_identifiers(mut self, identifiers: SignatureIdentifiers) -> Self {
        self.signature_identifiers = Some(identifiers);
        self
    }
}

/// Port for the hierarchical chunking engine
///
/// Implementations own the parser and the language registry. Each
/// document is processed independently: a failing document must not
/// affect the others, and no partial chunk list is ever returned for a
/// failed document.
#[async_trait]
pub trait HierarchyChunker: Send + Sync {
    /// Chunk a single document into a flat, tree-walk-ordered list of
    /// chunks with parent/child links attached
    async fn chunk_document(
        &self,
        document: &SourceDocument,
        config: &ChunkerConfig,
    ) -> Result<Vec<CodeChunk>>;

    /// Chunk a batch of documents; one result per document, in order
    async fn chunk_documents(
        &self,
        documents: &[SourceDocument],
        config: &ChunkerConfig,
    ) -> Vec<Result<Vec<CodeChunk>>>;

    /// Languages with registry entries available to this engine
    fn supported_languages(&self) -> Vec<Language>;

    /// Whether a language can be chunked by this engine
    fn is_language_supported(&self, language: Language) -> bool {
        self.supported_languages().contains(&language)
    }
}

/// Shared hierarchy chunker handle
pub type SharedHierarchyChunker = Arc<dyn HierarchyChunker>;
