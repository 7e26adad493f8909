//! Ruby registry entry
//!
//! Bodies are `body_statement` nodes; an empty method has none, in
//! which case the signature falls back to the whole node.

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "method".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("body_statement")]),
    );
    identifiers.insert(
        "class".to_string(),
        SignatureCaptureOptions::named("constant")
            .with_end(vec![SignatureCapture::exclusive("body_statement")]),
    );
    identifiers.insert(
        "module".to_string(),
        SignatureCaptureOptions::named("constant")
            .with_end(vec![SignatureCapture::exclusive("body_statement")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("# {}", ScopeStyle::Indentation),
        tree_sitter_ruby::LANGUAGE.into(),
    )
}
