//! Icon configuration loading, validation, and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ConfigError;

/// Icon font configuration.
///
/// Loaded from `~/.config/par-icon/config.yaml`:
///
/// ```yaml
/// default_specifier: fa
/// specifiers: [fa, fi]
/// legend_dir: ~/.config/par-icon/fonts
/// use_bundled_legends: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Specifier used when a key has no recognized `specifier-` prefix
    #[serde(default = "defaults::default_specifier")]
    pub default_specifier: String,

    /// Font families recognized as key prefixes
    #[serde(default = "defaults::specifiers")]
    pub specifiers: Vec<String>,

    /// Directory holding extra legends laid out as `<dir>/<spec>/<spec>.yml`
    #[serde(default)]
    pub legend_dir: Option<PathBuf>,

    /// Include the legends compiled into par-icon-legend
    #[serde(default = "defaults::use_bundled_legends")]
    pub use_bundled_legends: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_specifier: defaults::default_specifier(),
            specifiers: defaults::specifiers(),
            legend_dir: None,
            use_bundled_legends: defaults::use_bundled_legends(),
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default specifier.
    pub fn with_default_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.default_specifier = specifier.into();
        self
    }

    /// Add a recognized specifier if it is not already listed.
    pub fn with_specifier(mut self, specifier: impl Into<String>) -> Self {
        let specifier = specifier.into();
        if !self.specifiers.contains(&specifier) {
            self.specifiers.push(specifier);
        }
        self
    }

    /// Set the on-disk legend directory.
    pub fn with_legend_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.legend_dir = Some(dir.into());
        self
    }

    /// Load configuration from the default path, or defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: IconConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every specifier is usable as a key prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_specifier("default_specifier", &self.default_specifier)?;
        for specifier in &self.specifiers {
            validate_specifier("specifiers", specifier)?;
        }
        Ok(())
    }

    /// All recognized specifiers, always including the default one.
    pub fn recognized_specifiers(&self) -> Vec<String> {
        let mut all = self.specifiers.clone();
        if !all.contains(&self.default_specifier) {
            all.push(self.default_specifier.clone());
        }
        all
    }

    /// The legend directory with a leading `~` expanded to the home directory.
    pub fn resolved_legend_dir(&self) -> Option<PathBuf> {
        let dir = self.legend_dir.as_ref()?;
        if let Ok(rest) = dir.strip_prefix("~")
            && let Some(home) = dirs::home_dir()
        {
            return Some(home.join(rest));
        }
        Some(dir.clone())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-icon")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("par-icon")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

fn validate_specifier(field: &str, specifier: &str) -> Result<(), ConfigError> {
    if specifier.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{field}: specifier must not be empty"
        )));
    }
    if specifier.contains('-') {
        return Err(ConfigError::Validation(format!(
            "{field}: specifier '{specifier}' must not contain '-'"
        )));
    }
    if specifier.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field}: specifier '{specifier}' must not contain whitespace"
        )));
    }
    Ok(())
}
