//! Default values for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on `IconConfig` fields.

/// Specifier used when a key carries no recognized prefix (FontAwesome).
pub fn default_specifier() -> String {
    "fa".to_string()
}

pub fn specifiers() -> Vec<String> {
    vec![default_specifier()]
}

pub fn use_bundled_legends() -> bool {
    true
}
