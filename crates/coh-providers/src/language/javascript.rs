//! JavaScript registry entry

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "function_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("statement_block")]),
    );
    identifiers.insert(
        "class_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("class_body")]),
    );
    identifiers.insert(
        "method_definition".to_string(),
        SignatureCaptureOptions::named("property_identifier")
            .with_end(vec![SignatureCapture::exclusive("statement_block")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_javascript::LANGUAGE.into(),
    )
}
