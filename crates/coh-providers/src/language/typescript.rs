//! TypeScript registry entry
//!
//! `lexical_declaration` covers arrow functions assigned to `const`;
//! the exclusive `{` keeps every body out of the signature.

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "interface_declaration".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );
    identifiers.insert(
        "lexical_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );
    identifiers.insert(
        "function_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );
    identifiers.insert(
        "class_declaration".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );
    identifiers.insert(
        "method_definition".to_string(),
        SignatureCaptureOptions::named("property_identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    )
}
