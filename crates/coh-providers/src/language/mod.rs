//! Language Registry
//!
//! The only place languages are enumerated. Every language module
//! contributes one [`LanguageSupport`] bundle: the signature identifier
//! table (which node types define scopes and how to capture their names
//! and signatures), the comment options used by the skeletonizer, and
//! the tree-sitter grammar.
//!
//! Adding a language requires no control-flow changes: write the two
//! tables in a new module and register it here.

use std::collections::HashMap;
use std::sync::LazyLock;

use coh_domain::{CommentOptions, Error, Language, Result, SignatureIdentifiers};

/// C registry entry
pub mod c;
/// C++ registry entry
pub mod cpp;
/// C# registry entry
pub mod csharp;
/// Go registry entry
pub mod go;
/// HTML registry entry
pub mod html;
/// Java registry entry
pub mod java;
/// JavaScript registry entry
pub mod javascript;
/// Python registry entry
pub mod python;
/// Ruby registry entry
pub mod ruby;
/// Rust registry entry
pub mod rust;
/// TypeScript registry entry
pub mod typescript;

/// Everything the pipeline needs to know about one language
pub struct LanguageSupport {
    /// Scope node types mapped to their signature capture options
    pub signature_identifiers: SignatureIdentifiers,
    /// Comment template and scope style for skeleton stubs
    pub comment_options: CommentOptions,
    grammar: tree_sitter::Language,
}

impl LanguageSupport {
    /// Bundle the two registry tables with the grammar
    pub fn new(
        signature_identifiers: SignatureIdentifiers,
        comment_options: CommentOptions,
        grammar: tree_sitter::Language,
    ) -> Self {
        Self {
            signature_identifiers,
            comment_options,
            grammar,
        }
    }

    /// The tree-sitter grammar for this language
    pub fn grammar(&self) -> tree_sitter::Language {
        self.grammar.clone()
    }
}

static LANGUAGE_REGISTRY: LazyLock<HashMap<Language, LanguageSupport>> = LazyLock::new(|| {
    let mut registry = HashMap::new();

    registry.insert(Language::Python, python::support());
    registry.insert(Language::Html, html::support());
    registry.insert(Language::C, c::support());
    registry.insert(Language::Cpp, cpp::support());
    registry.insert(Language::CSharp, csharp::support());
    registry.insert(Language::TypeScript, typescript::support());
    registry.insert(Language::JavaScript, javascript::support());
    registry.insert(Language::Rust, rust::support());
    registry.insert(Language::Java, java::support());
    registry.insert(Language::Go, go::support());
    registry.insert(Language::Ruby, ruby::support());

    registry
});

/// The full support bundle for a language
pub fn language_support(language: Language) -> Result<&'static LanguageSupport> {
    LANGUAGE_REGISTRY
        .get(&language)
        .ok_or_else(|| Error::unsupported_language(language.as_str()))
}

/// The signature identifier table for a language
pub fn signature_identifiers(language: Language) -> Result<&'static SignatureIdentifiers> {
    language_support(language).map(|s| &s.signature_identifiers)
}

/// The comment options for a language
pub fn comment_options(language: Language) -> Result<&'static CommentOptions> {
    language_support(language).map(|s| &s.comment_options)
}

/// All languages with a registry entry
pub fn supported_languages() -> Vec<Language> {
    let mut languages: Vec<Language> = LANGUAGE_REGISTRY.keys().copied().collect();
    languages.sort();
    languages
}
