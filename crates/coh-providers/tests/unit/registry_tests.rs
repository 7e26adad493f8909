//! Unit tests for the language registry

use coh_domain::{Language, ScopeStyle};
use coh_providers::language::{
    comment_options, language_support, signature_identifiers, supported_languages,
};

#[test]
fn test_every_language_has_both_tables() {
    for language in Language::ALL {
        let support = language_support(language).unwrap();
        assert!(
            !support.signature_identifiers.is_empty(),
            "{language} has no signature identifiers"
        );
        assert!(
            support.comment_options.comment_template.contains("{}"),
            "{language} comment template has no placeholder"
        );
    }
}

#[test]
fn test_supported_languages_lists_all() {
    let languages = supported_languages();
    assert_eq!(languages.len(), Language::ALL.len());
    for language in Language::ALL {
        assert!(languages.contains(&language));
    }
}

#[test]
fn test_python_entry() {
    let identifiers = signature_identifiers(Language::Python).unwrap();
    for node_type in ["function_definition", "class_definition"] {
        let options = identifiers.get(node_type).unwrap();
        assert_eq!(options.name_identifier, "identifier");
        assert_eq!(options.end_signature_types.len(), 1);
        assert_eq!(options.end_signature_types[0].node_type, "block");
        assert!(!options.end_signature_types[0].inclusive);
    }

    let comments = comment_options(Language::Python).unwrap();
    assert_eq!(comments.comment_template, "# {}");
    assert_eq!(comments.scope_style, ScopeStyle::Indentation);
}

#[test]
fn test_html_entry_uses_inclusive_markers() {
    let identifiers = signature_identifiers(Language::Html).unwrap();
    let element = identifiers.get("element").unwrap();
    assert_eq!(element.name_identifier, "tag_name");
    assert_eq!(element.start_signature_types[0].node_type, "<");
    assert!(element.start_signature_types[0].inclusive);
    assert_eq!(element.end_signature_types[0].node_type, ">");
    assert!(element.end_signature_types[0].inclusive);
}

#[test]
fn test_bracket_languages_use_bracket_scope_style() {
    for language in [
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::TypeScript,
        Language::JavaScript,
        Language::Rust,
        Language::Java,
        Language::Go,
    ] {
        let comments = comment_options(language).unwrap();
        assert_eq!(comments.scope_style, ScopeStyle::Brackets, "{language}");
        assert_eq!(comments.comment_template, "// {}", "{language}");
    }
}

#[test]
fn test_indentation_languages() {
    assert_eq!(
        comment_options(Language::Ruby).unwrap().scope_style,
        ScopeStyle::Indentation
    );
    assert_eq!(
        comment_options(Language::Html).unwrap().comment_template,
        "<!-- {} -->"
    );
}
