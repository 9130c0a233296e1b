//! Font specifiers and icon key parsing.
//!
//! An icon key is an optional `specifier-` prefix followed by a base key:
//! `fa-beer` names the `beer` icon of the `fa` font. A prefix only counts
//! when it is a known specifier; `arrows-h` with no `arrows` font is a base
//! key of the default font.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use par_icon_config::IconConfig;
use serde::Serialize;

use crate::error::LegendError;

/// Short identifier for an icon font family (e.g. `fa`).
///
/// Case-sensitive: `FA` and `fa` are different specifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FontSpecifier(String);

impl FontSpecifier {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self(specifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `specifier-` prefix keys of this font may carry.
    pub fn key_prefix(&self) -> String {
        format!("{}-", self.0)
    }
}

impl fmt::Display for FontSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontSpecifier {
    fn from(specifier: &str) -> Self {
        Self::new(specifier)
    }
}

impl From<String> for FontSpecifier {
    fn from(specifier: String) -> Self {
        Self(specifier)
    }
}

// Ord, Eq and Hash all follow the inner string, so set lookups by `&str` agree
impl Borrow<str> for FontSpecifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FontSpecifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A key split into the font it belongs to and its base key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParts {
    pub specifier: FontSpecifier,
    pub base_key: String,
}

/// The set of specifiers recognized as key prefixes, plus the fallback.
#[derive(Debug, Clone)]
pub struct SpecifierRegistry {
    known: BTreeSet<FontSpecifier>,
    default: FontSpecifier,
}

impl SpecifierRegistry {
    /// Create a registry. The default specifier is always recognized.
    pub fn new<I, S>(default: impl Into<FontSpecifier>, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FontSpecifier>,
    {
        let default = default.into();
        let mut known: BTreeSet<FontSpecifier> = known.into_iter().map(Into::into).collect();
        known.insert(default.clone());
        Self { known, default }
    }

    /// Build the registry from configuration.
    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(
            config.default_specifier.as_str(),
            config.recognized_specifiers(),
        )
    }

    /// Recognize an additional specifier, e.g. one discovered on disk.
    pub fn insert(&mut self, specifier: FontSpecifier) -> bool {
        self.known.insert(specifier)
    }

    pub fn is_known(&self, specifier: &str) -> bool {
        self.known.contains(specifier)
    }

    pub fn default_specifier(&self) -> &FontSpecifier {
        &self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontSpecifier> {
        self.known.iter()
    }

    /// Split a key into its specifier and base key.
    ///
    /// The prefix ends at the first `-` and must be a known specifier;
    /// otherwise the whole key is a base key of the default specifier.
    /// A base key may come back empty (`fa-`); that is reported later by
    /// [`Legend::unicode`](crate::Legend::unicode) as `IconKeyEmpty`.
    ///
    /// # Errors
    ///
    /// Returns [`LegendError::InvalidKey`] if the key is empty or blank.
    pub fn specifier_from_key(&self, key: &str) -> Result<KeyParts, LegendError> {
        if key.trim().is_empty() {
            return Err(LegendError::InvalidKey(key.to_string()));
        }

        if let Some((prefix, rest)) = key.split_once('-')
            && let Some(specifier) = self.known.get(prefix)
        {
            return Ok(KeyParts {
                specifier: specifier.clone(),
                base_key: rest.to_string(),
            });
        }

        Ok(KeyParts {
            specifier: self.default.clone(),
            base_key: key.to_string(),
        })
    }

    /// Split a key against an explicitly chosen specifier.
    ///
    /// The explicit specifier wins; its prefix is stripped when present and
    /// no inference is made from any other prefix.
    pub fn with_explicit(
        &self,
        key: &str,
        specifier: &FontSpecifier,
    ) -> Result<KeyParts, LegendError> {
        if key.trim().is_empty() {
            return Err(LegendError::InvalidKey(key.to_string()));
        }

        let base_key = key.strip_prefix(&specifier.key_prefix()).unwrap_or(key);
        Ok(KeyParts {
            specifier: specifier.clone(),
            base_key: base_key.to_string(),
        })
    }
}

impl Default for SpecifierRegistry {
    fn default() -> Self {
        Self::from_config(&IconConfig::default())
    }
}
