//! Error handling types

use thiserror::Error;

use crate::value_objects::Language;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for code-hierarchy
#[derive(Error, Debug)]
pub enum Error {
    /// Language tag missing from the language registry
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// The language tag that failed to resolve
        language: String,
    },

    /// The syntax tree root reported an immediate ERROR child
    #[error("could not parse code with language {language}")]
    ParseFailure {
        /// The language the parser was configured with
        language: Language,
    },

    /// Tabs and spaces found in the same leading-whitespace context
    #[error("mixed indentation found")]
    MixedIndentation,

    /// A parent/child pair violated the chunk forest structure during
    /// skeletonization
    #[error("structural violation: {message}")]
    StructuralViolation {
        /// Description of the violated relationship
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create an unsupported language error
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Create a parse failure error
    pub fn parse_failure(language: Language) -> Self {
        Self::ParseFailure { language }
    }

    /// Create a structural violation error
    pub fn structural<S: Into<String>>(message: S) -> Self {
        Self::StructuralViolation {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
