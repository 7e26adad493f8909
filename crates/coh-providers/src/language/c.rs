//! C registry entry

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "function_definition".to_string(),
        SignatureCaptureOptions::named("function_declarator")
            .with_end(vec![SignatureCapture::exclusive("compound_statement")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_c::LANGUAGE.into(),
    )
}
