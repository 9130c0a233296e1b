//! Parsed units of inline text.

use std::collections::BTreeMap;

use par_icon_legend::FontSpecifier;
use serde::Serialize;

/// A resolved icon occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconRef {
    pub codepoint: char,
    pub specifier: FontSpecifier,
    /// Tag attributes, verbatim (e.g. `color`, `size`)
    pub attributes: BTreeMap<String, String>,
    /// Text the tag enclosed, verbatim
    pub key: String,
}

/// One unit of a parsed string, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Literal(String),
    Icon(IconRef),
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn as_icon(&self) -> Option<&IconRef> {
        match self {
            Self::Icon(icon) => Some(icon),
            Self::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Concatenate segments back to text, writing each icon as its original key.
///
/// For any scanned input this equals the input with the icon tag markup
/// (but not the enclosed keys) removed.
pub fn plain_text(segments: &[Segment]) -> String {
    let mut text = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Icon(icon) => text.push_str(&icon.key),
        }
    }
    text
}
