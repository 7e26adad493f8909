//! HTML registry entry
//!
//! An element's signature is its opening tag, closing `>` included;
//! there is no exclusive terminator that could express this, hence the
//! inclusive markers on both sides.

use coh_domain::{
    CommentOptions, ScopeStyle, SignatureCapture, SignatureCaptureOptions, SignatureIdentifiers,
};

use super::LanguageSupport;

pub(crate) fn support() -> LanguageSupport {
    let mut identifiers = SignatureIdentifiers::new();

    identifiers.insert(
        "element".to_string(),
        SignatureCaptureOptions::named("tag_name")
            .with_start(vec![SignatureCapture::inclusive("<")])
            .with_end(vec![SignatureCapture::inclusive(">")]),
    );

    LanguageSupport::new(
        identifiers,
        CommentOptions::new("<!-- {} -->", ScopeStyle::Indentation),
        tree_sitter_html::LANGUAGE.into(),
    )
}
