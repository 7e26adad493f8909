//! Python registry entry
//!
//! Functions and classes scope by an indented `block`; the signature is
//! everything before the block, which also keeps decorators out of the
//! signature (the `decorated_definition` wrapper is not a scope, so
//! decorated functions float up to the nearest enclosing scope).

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "function_definition".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );
    identifiers.insert(
        "class_definition".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("# {}", ScopeStyle::Indentation),
        tree_sitter_python::LANGUAGE.into(),
    )
}
