//! Domain layer constants
//!
//! Defaults shared by the chunker and the skeletonizer. Provider-specific
//! tuning stays next to the providers.

/// Minimum number of characters a non-root chunk must have to be emitted.
///
/// Defaults to 80 because that is about how long a skeleton replacement
/// stub is; smaller chunks would be replaced by text longer than
/// themselves.
pub const DEFAULT_CHUNK_MIN_CHARACTERS: usize = 80;

/// Indent character assumed when a block carries no indentation at all
pub const DEFAULT_INDENT_CHAR: char = ' ';

/// Indent width assumed when a block carries no indentation at all
pub const DEFAULT_INDENT_COUNT_PER_LEVEL: usize = 4;

/// Metadata key carrying the originating file path, required by the
/// hierarchy view
pub const METADATA_KEY_FILEPATH: &str = "filepath";
