//! code-hierarchy - Entry Point
//!
//! Small command line front end over the chunking engine: chunk files
//! into JSON, or print the Markdown hierarchy view of their scopes.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use coh::application::{hierarchy_markdown, ChunkerConfig, HierarchyChunker};
use coh::domain::{CodeChunk, Language, SourceDocument};
use coh::providers::{HierarchyChunkerEngine, LineWindowSplitter};

/// Command line interface for code-hierarchy
#[derive(Parser, Debug)]
#[command(name = "coh")]
#[command(about = "code-hierarchy - hierarchical code chunking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chunk a source file and print the chunk list as JSON
    Chunk {
        /// Source file to chunk
        file: PathBuf,

        /// Language tag; inferred from the file extension when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Keep child bodies in parent chunks instead of skeleton stubs
        #[arg(long)]
        no_skeleton: bool,

        /// Minimum number of characters per chunk
        #[arg(long)]
        min_characters: Option<usize>,

        /// Re-split chunks into windows of at most this many lines
        #[arg(long)]
        split_lines: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the Markdown hierarchy view of one or more files
    Hierarchy {
        /// Source files to include
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Maximum scope depth; -1 for unlimited
        #[arg(long, default_value_t = -1)]
        max_depth: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chunk {
            file,
            language,
            no_skeleton,
            min_characters,
            split_lines,
            pretty,
        } => {
            let language = resolve_language(&file, language.as_deref())?;
            let mut config = ChunkerConfig::new(language).with_skeleton(!no_skeleton);
            if let Some(min) = min_characters {
                config = config.with_chunk_min_characters(min);
            }

            let mut engine = HierarchyChunkerEngine::new();
            if let Some(max_lines) = split_lines {
                engine =
                    engine.with_secondary_splitter(Arc::new(LineWindowSplitter::new(max_lines)));
            }

            let chunks = chunk_file(&engine, &file, &config).await?;
            let output = if pretty {
                serde_json::to_string_pretty(&chunks)?
            } else {
                serde_json::to_string(&chunks)?
            };
            println!("{output}");
        }
        Command::Hierarchy { files, max_depth } => {
            let engine = HierarchyChunkerEngine::new();
            let mut all_chunks = Vec::new();
            for file in &files {
                let language = resolve_language(file, None)?;
                let config = ChunkerConfig::new(language);
                all_chunks.extend(chunk_file(&engine, file, &config).await?);
            }
            let (_, markdown) = hierarchy_markdown(&all_chunks, max_depth)?;
            print!("{markdown}");
        }
    }
    Ok(())
}

async fn chunk_file(
    engine: &HierarchyChunkerEngine,
    file: &Path,
    config: &ChunkerConfig,
) -> anyhow::Result<Vec<CodeChunk>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document = SourceDocument::new(text).with_filepath(file.to_string_lossy());
    let chunks = engine
        .chunk_document(&document, config)
        .await
        .with_context(|| format!("failed to chunk {}", file.display()))?;
    Ok(chunks)
}

fn resolve_language(file: &Path, tag: Option<&str>) -> anyhow::Result<Language> {
    if let Some(tag) = tag {
        return Ok(Language::from_str(tag)?);
    }
    let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
        bail!(
            "cannot infer language for {}; pass --language",
            file.display()
        );
    };
    Language::from_extension(ext).with_context(|| {
        format!(
            "no language registered for extension .{ext}; pass --language"
        )
    })
}
