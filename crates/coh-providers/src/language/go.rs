//! Go registry entry

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "function_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );
    // Methods name themselves with a field_identifier after the receiver
    identifiers.insert(
        "method_declaration".to_string(),
        SignatureCaptureOptions::named("field_identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_go::LANGUAGE.into(),
    )
}
