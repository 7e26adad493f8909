//! Scope chain and per-language capture options
//!
//! These value objects describe how a scope presents itself in source
//! text: the chain entry recorded on every chunk, the per-node-type
//! options used to locate a scope's name and signature, and the comment
//! options used when a child scope is replaced by a skeleton stub.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry of a chunk's enclosing-scope chain
///
/// Like a syntax-tree node, but with only the string information the
/// pipeline needs. Immutable once attached to a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeItem {
    /// Display name of the scope (function name, class name, tag name)
    pub name: String,
    /// The syntax-tree node type that produced this scope
    #[serde(rename = "type")]
    pub node_type: String,
    /// The scope's signature text, trimmed
    pub signature: String,
}

/// A signature boundary marker: a node type, and whether the matched
/// node's text belongs to the signature
///
/// Some languages need the terminator inside the signature (HTML's
/// closing `>`), others need the body opener excluded (the `{` in
/// C-family, the indented block in Python).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCapture {
    /// The node type string to match on
    pub node_type: String,
    /// Whether to include the text of the matched node
    pub inclusive: bool,
}

impl SignatureCapture {
    /// Marker whose matched node's text is part of the signature
    pub fn inclusive<S: Into<String>>(node_type: S) -> Self {
        Self {
            node_type: node_type.into(),
            inclusive: true,
        }
    }

    /// Marker whose matched node's text is excluded from the signature
    pub fn exclusive<S: Into<String>>(node_type: S) -> Self {
        Self {
            node_type: node_type.into(),
            inclusive: false,
        }
    }
}

/// Options for capturing the name and signature of one scope node type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCaptureOptions {
    /// Node types any of which indicate the beginning of the signature.
    /// Empty means: use the scope node's own start byte.
    #[serde(default)]
    pub start_signature_types: Vec<SignatureCapture>,
    /// Node types any of which indicate the end of the signature.
    /// Empty means: use the scope node's own end byte.
    #[serde(default)]
    pub end_signature_types: Vec<SignatureCapture>,
    /// The node type whose text is the scope's display name
    pub name_identifier: String,
}

impl SignatureCaptureOptions {
    /// Options with only a name identifier; signature spans the whole node
    pub fn named<S: Into<String>>(name_identifier: S) -> Self {
        Self {
            start_signature_types: Vec::new(),
            end_signature_types: Vec::new(),
            name_identifier: name_identifier.into(),
        }
    }

    /// Add start signature markers
    pub fn with_start(mut self, markers: Vec<SignatureCapture>) -> Self {
        self.start_signature_types = markers;
        self
    }

    /// Add end signature markers
    pub fn with_end(mut self, markers: Vec<SignatureCapture>) -> Self {
        self.end_signature_types = markers;
        self
    }
}

/// Maps a scope node type to its signature capture options
///
/// This is one of the two per-language registry tables; a node type
/// present here is what makes a syntax node a scope node.
pub type SignatureIdentifiers = HashMap<String, SignatureCaptureOptions>;

/// How a language delimits scope bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeStyle {
    /// Bodies are delimited by brackets (`{` ... `}`)
    Brackets,
    /// Bodies are delimited by indentation
    Indentation,
}

/// Comment template and scope style for one language
///
/// The template contains a single `{}` placeholder replaced by the
/// comment content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOptions {
    /// Comment line template, e.g. `"// {}"` or `"# {}"`
    pub comment_template: String,
    /// How this language delimits scope bodies
    pub scope_style: ScopeStyle,
}

impl CommentOptions {
    /// Create comment options
    pub fn new<S: Into<String>>(comment_template: S, scope_style: ScopeStyle) -> Self {
        Self {
            comment_template: comment_template.into(),
            scope_style,
        }
    }

    /// Render `content` through the comment template
    pub fn render(&self, content: &str) -> String {
        self.comment_template.replacen("{}", content, 1)
    }
}
