//! Unit tests for the indentation analyzer

use coh_domain::Error;
use coh_providers::chunking::indentation::{analyze, Indentation};

#[test]
fn test_space_indentation() {
    let indentation = analyze("def f():\n    x=1\n").unwrap();
    assert_eq!(
        indentation,
        Indentation {
            indent_char: ' ',
            count_per_level: 4,
            first_line_level: 0,
        }
    );
}

#[test]
fn test_tab_indentation_with_indented_first_line() {
    let indentation = analyze("\tdef f():\n\t\tx=1\n").unwrap();
    assert_eq!(
        indentation,
        Indentation {
            indent_char: '\t',
            count_per_level: 1,
            first_line_level: 1,
        }
    );
}

#[test]
fn test_first_line_level_uses_minimum_chain() {
    let indentation = analyze("    def g():\n        pass\n").unwrap();
    assert_eq!(indentation.count_per_level, 4);
    assert_eq!(indentation.first_line_level, 1);
}

#[test]
fn test_mixed_indentation_on_one_line() {
    let err = analyze("def f():\n \tx=1\n").unwrap_err();
    assert!(matches!(err, Error::MixedIndentation));
}

#[test]
fn test_mixed_indentation_across_lines() {
    let err = analyze("    a = 1\n\tb = 2\n").unwrap_err();
    assert!(matches!(err, Error::MixedIndentation));

    let err = analyze("\ta = 1\n    b = 2\n").unwrap_err();
    assert!(matches!(err, Error::MixedIndentation));
}

#[test]
fn test_no_indentation_returns_defaults() {
    let indentation = analyze("a = 1\nb = 2\n").unwrap();
    assert_eq!(
        indentation,
        Indentation {
            indent_char: ' ',
            count_per_level: 4,
            first_line_level: 0,
        }
    );
}

#[test]
fn test_empty_text_is_rejected() {
    let err = analyze("").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_blank_lines_are_ignored() {
    let indentation = analyze("def f():\n\n    x=1\n").unwrap();
    assert_eq!(indentation.count_per_level, 4);
}
