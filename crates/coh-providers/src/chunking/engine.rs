//! Hierarchy chunking engine
//!
//! Ties the pipeline together behind the application port: parse,
//! chunk, stamp metadata, skeletonize, and optionally re-split long
//! chunks through a secondary splitter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use coh_application::ports::chunking::{ChunkerConfig, HierarchyChunker};
use coh_application::ports::splitting::SecondarySplitter;
use coh_domain::{CodeChunk, CommentOptions, Error, Language, Result, SourceDocument};

use crate::chunking::comments::comment_line;
use crate::chunking::traverser::HierarchicalChunker;
use crate::chunking::{parser, skeleton};
use crate::language::{language_support, supported_languages};

/// The hierarchical chunking engine
///
/// Owns no per-document state; a single engine can serve any number of
/// documents, one at a time each.
#[derive(Clone, Default)]
pub struct HierarchyChunkerEngine {
    splitter: Option<Arc<dyn SecondarySplitter>>,
}

impl HierarchyChunkerEngine {
    /// Create an engine without a secondary splitter
    pub fn new() -> Self {
        Self { splitter: None }
    }

    /// Attach a secondary splitter invoked per chunk after
    /// skeletonization
    pub fn with_secondary_splitter(mut self, splitter: Arc<dyn SecondarySplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Synchronous core of [`HierarchyChunker::chunk_document`]
    pub fn chunk_document_sync(
        &self,
        document: &SourceDocument,
        config: &ChunkerConfig,
    ) -> Result<Vec<CodeChunk>> {
        let support = language_support(config.language)?;
        let identifiers = config
            .signature_identifiers
            .as_ref()
            .unwrap_or(&support.signature_identifiers);

        let tree = parser::parse(config.language, &document.text)?;

        let chunker = HierarchicalChunker::new(
            &document.text,
            config.language,
            identifiers,
            config.chunk_min_characters,
        );
        let mut chunks = chunker.chunk(tree.root_node())?;

        // Stamp document metadata (chunk keys win) and the SOURCE link
        for chunk in &mut chunks {
            chunk.merge_document_metadata(&document.metadata);
            chunk.relationships.source = Some(document.related_info());
        }

        if config.skeleton {
            skeleton::skeletonize(&mut chunks, &support.comment_options)?;
        }

        if let Some(splitter) = &self.splitter {
            chunks = resplit(chunks, splitter.as_ref(), &support.comment_options)?;
        }

        debug!(
            document = %document.id,
            language = %config.language,
            chunks = chunks.len(),
            "chunked document"
        );
        Ok(chunks)
    }
}

/// Run every chunk through the secondary splitter and re-thread the
/// results
///
/// The first sub-chunk inherits the original chunk's id so external
/// references stay valid; adjacent sub-chunks are threaded with pointer
/// comment lines naming the next/previous sub-chunk; all sub-chunks
/// inherit the original relationships.
fn resplit(
    chunks: Vec<CodeChunk>,
    splitter: &dyn SecondarySplitter,
    options: &CommentOptions,
) -> Result<Vec<CodeChunk>> {
    let mut out: Vec<CodeChunk> = Vec::with_capacity(chunks.len());
    let mut rewrites: Vec<(String, String)> = Vec::new();

    for chunk in chunks {
        let windows = splitter.split(&chunk.text);
        if windows.len() <= 1 {
            out.push(chunk);
            continue;
        }

        let mut subs: Vec<CodeChunk> = windows
            .into_iter()
            .map(|window| {
                let mut sub = CodeChunk::new(
                    window,
                    chunk.language,
                    chunk.inclusive_scopes.clone(),
                    chunk.start_byte,
                    chunk.end_byte,
                );
                sub.metadata = chunk.metadata.clone();
                sub.relationships = chunk.relationships.clone();
                sub
            })
            .collect();
        subs[0].id = chunk.id.clone();

        // Append a pointer to the next sub-chunk to all but the last
        for i in 0..subs.len() - 1 {
            let line = comment_line(&subs[i + 1], options, Some(0))?;
            let threaded = format!("{}\n{line}", subs[i].text).trim().to_string();
            subs[i].text = threaded;
        }
        // Prepend a pointer to the previous sub-chunk to all but the first
        for i in 1..subs.len() {
            let line = comment_line(&subs[i - 1], options, None)?;
            let threaded = format!("{line}{}", subs[i].text).trim().to_string();
            subs[i].text = threaded;
        }

        rewrites.push((chunk.id.clone(), subs[0].id.clone()));
        out.extend(subs);
    }

    // Rewrite references to replaced ids onto the first sub-chunk
    for (old_id, new_id) in rewrites {
        if old_id == new_id {
            continue;
        }
        for chunk in &mut out {
            if let Some(parent) = &mut chunk.relationships.parent {
                if parent.id == old_id {
                    parent.id = new_id.clone();
                }
            }
            for child in &mut chunk.relationships.children {
                if child.id == old_id {
                    child.id = new_id.clone();
                }
            }
        }
    }

    Ok(out)
}

#[async_trait]
impl HierarchyChunker for HierarchyChunkerEngine {
    async fn chunk_document(
        &self,
        document: &SourceDocument,
        config: &ChunkerConfig,
    ) -> Result<Vec<CodeChunk>> {
        let engine = self.clone();
        let document = document.clone();
        let config = config.clone();
        tokio::task::spawn_blocking(move || engine.chunk_document_sync(&document, &config))
            .await
            .map_err(|e| Error::internal(format!("chunking task failed: {e}")))?
    }

    async fn chunk_documents(
        &self,
        documents: &[SourceDocument],
        config: &ChunkerConfig,
    ) -> Vec<Result<Vec<CodeChunk>>> {
        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            results.push(self.chunk_document(document, config).await);
        }
        results
    }

    fn supported_languages(&self) -> Vec<Language> {
        supported_languages()
    }
}
