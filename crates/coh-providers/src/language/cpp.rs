//! C++ registry entry

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "class_specifier".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );
    // The name is the whole declarator ("f()"), not the bare identifier
    identifiers.insert(
        "function_definition".to_string(),
        SignatureCaptureOptions::named("function_declarator")
            .with_end(vec![SignatureCapture::exclusive("{")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_cpp::LANGUAGE.into(),
    )
}
