//! Programming language identifier
//!
//! A closed enumeration of the languages the system ships registry
//! entries for. Other layers resolve per-language behavior through the
//! language registry, never by matching on this enum directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Python
    Python,
    /// HTML markup
    Html,
    /// C
    C,
    /// C++
    Cpp,
    /// C#
    CSharp,
    /// TypeScript
    #[serde(rename = "typescript")]
    TypeScript,
    /// JavaScript
    #[serde(rename = "javascript")]
    JavaScript,
    /// Rust
    Rust,
    /// Java
    Java,
    /// Go
    Go,
    /// Ruby
    Ruby,
}

impl Language {
    /// All languages the system ships registry entries for
    pub const ALL: [Language; 11] = [
        Language::Python,
        Language::Html,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::TypeScript,
        Language::JavaScript,
        Language::Rust,
        Language::Java,
        Language::Go,
        Language::Ruby,
    ];

    /// The canonical language tag
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Html => "html",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "c_sharp",
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Rust => "rust",
            Language::Java => "java",
            Language::Go => "go",
            Language::Ruby => "ruby",
        }
    }

    /// Resolve a language from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyi" => Some(Language::Python),
            "html" | "htm" => Some(Language::Html),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "ts" => Some(Language::TypeScript),
            "js" | "jsx" | "mjs" => Some(Language::JavaScript),
            "rs" => Some(Language::Rust),
            "java" => Some(Language::Java),
            "go" => Some(Language::Go),
            "rb" => Some(Language::Ruby),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| Error::unsupported_language(s))
    }
}
