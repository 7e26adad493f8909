//! Indentation analysis
//!
//! Determines the indent character, the indent width, and the first
//! line's indentation level of a text block. Used only by the
//! skeletonizer; never inspects code semantics.

use coh_domain::constants::{DEFAULT_INDENT_CHAR, DEFAULT_INDENT_COUNT_PER_LEVEL};
use coh_domain::{Error, Result};

/// The indentation profile of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    /// The indent character, space or tab
    pub indent_char: char,
    /// Number of indent characters per level
    pub count_per_level: usize,
    /// Indentation level of the first line
    pub first_line_level: usize,
}

/// Analyze the indentation of `text`
///
/// Fails with [`Error::MixedIndentation`] when tabs and spaces both
/// appear in leading whitespace, either on one line or across lines.
/// A block with no indentation at all yields `(' ', 4, 0)`.
pub fn analyze(text: &str) -> Result<Indentation> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return Err(Error::invalid_argument(
            "text should be at least one line long",
        ));
    }

    let mut indent_char: Option<char> = None;
    let mut minimum_chain: Option<usize> = None;

    for line in &lines {
        let stripped = line.trim_start();
        if stripped.is_empty() {
            continue;
        }
        let leading = &line[..line.len() - stripped.len()];
        let spaces = leading.chars().filter(|c| *c == ' ').count();
        let tabs = leading.chars().filter(|c| *c == '\t').count();

        if indent_char.is_none() {
            if spaces > 0 {
                indent_char = Some(' ');
            }
            if tabs > 0 {
                indent_char = Some('\t');
            }
        }

        if (spaces > 0 && tabs > 0)
            || (indent_char == Some(' ') && tabs > 0)
            || (indent_char == Some('\t') && spaces > 0)
        {
            return Err(Error::MixedIndentation);
        }

        if let Some(ch) = indent_char {
            let count = leading.chars().filter(|c| *c == ch).count();
            if count > 0 {
                minimum_chain = Some(minimum_chain.map_or(count, |m| m.min(count)));
            }
        }
    }

    let indent_char = indent_char.unwrap_or(DEFAULT_INDENT_CHAR);
    let count_per_level = minimum_chain.unwrap_or(DEFAULT_INDENT_COUNT_PER_LEVEL);

    let first_indent = lines[0].chars().take_while(|c| *c == indent_char).count();

    Ok(Indentation {
        indent_char,
        count_per_level,
        first_line_level: first_indent / count_per_level,
    })
}
