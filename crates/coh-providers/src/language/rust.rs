//! Rust registry entry
//!
//! Struct bodies come in two node flavors (named and tuple fields);
//! both are listed so either terminates the signature. Unit structs have
//! neither and fall back to the item's own end byte.

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "function_item".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("block")]),
    );
    identifiers.insert(
        "struct_item".to_string(),
        SignatureCaptureOptions::named("type_identifier").with_end(vec![
            SignatureCapture::exclusive("field_declaration_list"),
            SignatureCapture::exclusive("ordered_field_declaration_list"),
        ]),
    );
    identifiers.insert(
        "enum_item".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("enum_variant_list")]),
    );
    identifiers.insert(
        "trait_item".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("declaration_list")]),
    );
    identifiers.insert(
        "impl_item".to_string(),
        SignatureCaptureOptions::named("type_identifier")
            .with_end(vec![SignatureCapture::exclusive("declaration_list")]),
    );
    identifiers.insert(
        "mod_item".to_string(),
        SignatureCaptureOptions::named("identifier")
            .with_end(vec![SignatureCapture::exclusive("declaration_list")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("// {}", ScopeStyle::Brackets),
        tree_sitter_rust::LANGUAGE.into(),
    )
}
