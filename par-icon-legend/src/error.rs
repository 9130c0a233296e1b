//! Typed error types for legend loading and icon key resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::specifier::FontSpecifier;

/// Errors raised while resolving an icon key to a codepoint.
///
/// None of these are transient: each one points at a caller or
/// configuration mistake and is surfaced as-is.
#[derive(Debug, Error)]
pub enum LegendError {
    // -----------------------------------------------------------------------
    // Key errors
    // -----------------------------------------------------------------------
    /// The key string was empty or blank.
    #[error("Invalid icon key: '{0}'")]
    InvalidKey(String),

    /// Nothing remained of the key once its specifier prefix was removed.
    #[error("Icon key is empty after removing the '{specifier}' specifier")]
    IconKeyEmpty {
        /// Specifier the key was resolved against.
        specifier: FontSpecifier,
    },

    /// The base key is not present in the font's legend.
    #[error("Icon '{key}' not found in the '{specifier}' legend")]
    IconNotFound {
        /// Specifier of the legend that was searched.
        specifier: FontSpecifier,
        /// Base key that was looked up.
        key: String,
    },

    // -----------------------------------------------------------------------
    // Legend data errors
    // -----------------------------------------------------------------------
    /// No legend data exists for the specifier.
    #[error("Font not found: no legend data for '{0}'")]
    FontNotFound(FontSpecifier),

    /// The legend declaration could not be parsed.
    #[error("Legend for '{specifier}' is malformed: {message}")]
    LegendParse {
        /// Specifier of the malformed legend.
        specifier: FontSpecifier,
        /// Human-readable parse error.
        message: String,
    },

    /// The legend file exists but could not be read.
    #[error("Legend file read failed for '{}': {source}", path.display())]
    Io {
        /// Path to the legend file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
