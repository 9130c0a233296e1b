//! Render options forwarded to the host renderer.
//!
//! `color`, `size`, `set` and `inline` are understood by par-icon. Everything
//! else is opaque to it and passed through to the host untouched.

use par_icon_legend::FontSpecifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options bag accompanying an icon request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Text color as hex RGB (e.g. `0099FF`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,

    /// Explicit font specifier; overrides the key prefix
    #[serde(default, rename = "set", skip_serializing_if = "Option::is_none")]
    pub specifier: Option<String>,

    /// Treat the input as text containing `<icon>` tags
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,

    /// Layout and style options only the host understands
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.specifier = Some(specifier.into());
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Add an opaque pass-through option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn explicit_specifier(&self) -> Option<FontSpecifier> {
        self.specifier.as_deref().map(FontSpecifier::from)
    }

    /// The options the host renderer receives: everything but `set` and `inline`.
    pub fn pass_through(&self) -> Self {
        Self {
            specifier: None,
            inline: false,
            ..self.clone()
        }
    }
}

/// An icon as tabular cell data, ready for a host table without rendering.
///
/// `color` is re-keyed to `text_color`, the name table cells use. Opaque
/// options naming a fixed field only fill it when the typed option is unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellData {
    pub font: FontSpecifier,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl CellData {
    pub(crate) fn new(font: FontSpecifier, codepoint: char, options: &RenderOptions) -> Self {
        let mut extra = options.extra.clone();
        // The fixed fields own these keys; the opaque map must not repeat them
        for reserved in ["font", "content"] {
            extra.remove(reserved);
        }
        let opaque_text_color = take_str(&mut extra, "text_color");
        let opaque_color = take_str(&mut extra, "color");
        let opaque_size = extra
            .remove("size")
            .and_then(|value| value.as_f64())
            .map(|size| size as f32);

        Self {
            font,
            content: codepoint.to_string(),
            text_color: options
                .color
                .clone()
                .or(opaque_text_color)
                .or(opaque_color),
            size: options.size.or(opaque_size),
            options: extra,
        }
    }
}

fn take_str(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    map.remove(key).and_then(|value| value.as_str().map(str::to_string))
}
