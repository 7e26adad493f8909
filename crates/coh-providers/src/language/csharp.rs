//! C# registry entry

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "class_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("declaration_list")]),
    );
    identifiers.insert(
        "interface_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("declaration_list")]),
    );
    identifiers.insert(
        "method_declaration".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_c_sharp::LANGUAGE.into(),
    )
}
