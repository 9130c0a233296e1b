//! Legends: per-font tables mapping base keys to codepoints.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LegendError;
use crate::specifier::FontSpecifier;

/// On-disk legend declaration.
///
/// ```yaml
/// font_version: "4.7.0"
/// icons:
///   beer: "f0fc"
/// ```
#[derive(Debug, Deserialize)]
struct LegendFile {
    #[serde(default)]
    font_version: Option<String>,
    icons: BTreeMap<String, String>,
}

/// Key → codepoint table for one icon font.
///
/// Immutable once built; the cache hands out shared references.
#[derive(Debug, Clone)]
pub struct Legend {
    specifier: FontSpecifier,
    icons: HashMap<String, char>,
    version: Option<String>,
    /// Font file the host must register to draw these codepoints
    font_path: Option<PathBuf>,
}

impl Legend {
    pub fn new(specifier: FontSpecifier, icons: HashMap<String, char>) -> Self {
        Self {
            specifier,
            icons,
            version: None,
            font_path: None,
        }
    }

    /// Parse a YAML legend declaration.
    ///
    /// # Errors
    ///
    /// Returns [`LegendError::LegendParse`] if the YAML is malformed or a
    /// codepoint is not a hexadecimal unicode scalar value.
    pub fn from_yaml(specifier: FontSpecifier, yaml: &str) -> Result<Self, LegendError> {
        let file: LegendFile =
            serde_yaml_ng::from_str(yaml).map_err(|e| LegendError::LegendParse {
                specifier: specifier.clone(),
                message: e.to_string(),
            })?;

        let mut icons = HashMap::with_capacity(file.icons.len());
        for (key, code) in file.icons {
            let codepoint = parse_codepoint(&code).ok_or_else(|| LegendError::LegendParse {
                specifier: specifier.clone(),
                message: format!("invalid codepoint '{code}' for key '{key}'"),
            })?;
            icons.insert(key, codepoint);
        }

        Ok(Self {
            specifier,
            icons,
            version: file.font_version,
            font_path: None,
        })
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn specifier(&self) -> &FontSpecifier {
        &self.specifier
    }

    /// Font version declared by the legend data, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    /// Look up the codepoint for a base key.
    ///
    /// # Errors
    ///
    /// - [`LegendError::IconKeyEmpty`] if `base_key` is empty (checked first)
    /// - [`LegendError::IconNotFound`] if `base_key` is not in the legend
    pub fn unicode(&self, base_key: &str) -> Result<char, LegendError> {
        if base_key.is_empty() {
            return Err(LegendError::IconKeyEmpty {
                specifier: self.specifier.clone(),
            });
        }

        self.icons
            .get(base_key)
            .copied()
            .ok_or_else(|| LegendError::IconNotFound {
                specifier: self.specifier.clone(),
                key: base_key.to_string(),
            })
    }

    /// All base keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<(&str, char)> {
        let mut entries: Vec<(&str, char)> =
            self.icons.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Parse `f0fc`, `0xf0fc`, or `U+F0FC` into a char.
fn parse_codepoint(code: &str) -> Option<char> {
    let code = code.trim();
    let hex = code
        .strip_prefix("0x")
        .or_else(|| code.strip_prefix("U+"))
        .or_else(|| code.strip_prefix("u+"))
        .unwrap_or(code);
    // from_str_radix alone would also take a sign
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(value)
}
