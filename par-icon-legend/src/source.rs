//! Legend sources.
//!
//! A source knows which font families it can provide and how to read their
//! legend declarations. Sources are chained so that on-disk legends can add
//! to (or override) the tables compiled into the crate.

use std::fs;
use std::path::{Path, PathBuf};

use par_icon_config::IconConfig;

use crate::error::LegendError;
use crate::legend::Legend;
use crate::specifier::FontSpecifier;

/// Trait for reading legend declarations by specifier.
pub trait LegendSource: Send + Sync {
    /// Font families this source can provide.
    fn specifiers(&self) -> Vec<FontSpecifier>;

    /// Read and parse the legend for a specifier.
    ///
    /// Returns [`LegendError::FontNotFound`] when this source has no data
    /// for the specifier.
    fn read(&self, specifier: &FontSpecifier) -> Result<Legend, LegendError>;
}

/// Legend declarations compiled into the crate.
///
/// Each entry is `(specifier, yaml)`.
static BUNDLED: &[(&str, &str)] = &[("fa", include_str!("../data/fa.yml"))];

/// Source for the legends bundled with par-icon.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledLegends;

impl LegendSource for BundledLegends {
    fn specifiers(&self) -> Vec<FontSpecifier> {
        BUNDLED
            .iter()
            .map(|(specifier, _)| FontSpecifier::from(*specifier))
            .collect()
    }

    fn read(&self, specifier: &FontSpecifier) -> Result<Legend, LegendError> {
        let (_, yaml) = BUNDLED
            .iter()
            .find(|(name, _)| *name == specifier.as_str())
            .ok_or_else(|| LegendError::FontNotFound(specifier.clone()))?;
        Legend::from_yaml(specifier.clone(), yaml)
    }
}

/// Source reading legends from a directory tree.
///
/// Layout:
///
/// ```text
/// <root>/
///   fa/
///     fa.yml              # legend declaration
///     fontawesome.ttf     # font file registered with the host (optional)
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryLegends {
    root: PathBuf,
}

impl DirectoryLegends {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn family_dir(&self, specifier: &FontSpecifier) -> Option<PathBuf> {
        let name = specifier.as_str();
        // Specifiers name a single directory below the root
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return None;
        }
        Some(self.root.join(name))
    }

    fn legend_path(&self, specifier: &FontSpecifier) -> Option<PathBuf> {
        let path = self
            .family_dir(specifier)?
            .join(format!("{}.yml", specifier.as_str()));
        path.is_file().then_some(path)
    }
}

impl LegendSource for DirectoryLegends {
    fn specifiers(&self) -> Vec<FontSpecifier> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Cannot read legend directory {}: {}",
                    self.root.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut specifiers: Vec<FontSpecifier> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(FontSpecifier::from))
            .filter(|specifier| self.legend_path(specifier).is_some())
            .collect();
        specifiers.sort();
        specifiers
    }

    fn read(&self, specifier: &FontSpecifier) -> Result<Legend, LegendError> {
        let path = self
            .legend_path(specifier)
            .ok_or_else(|| LegendError::FontNotFound(specifier.clone()))?;

        log::debug!("Reading legend for '{}' from {}", specifier, path.display());
        let yaml = fs::read_to_string(&path).map_err(|source| LegendError::Io {
            path: path.clone(),
            source,
        })?;
        let legend = Legend::from_yaml(specifier.clone(), &yaml)?;

        match path.parent().and_then(find_font_file) {
            Some(font_path) => Ok(legend.with_font_path(font_path)),
            None => Ok(legend),
        }
    }
}

/// First `.ttf`/`.otf` file in a directory, by name.
fn find_font_file(dir: &Path) -> Option<PathBuf> {
    let mut fonts: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
        })
        .collect();
    fonts.sort();
    fonts.into_iter().next()
}

/// Ordered chain of sources; the first one holding a specifier wins.
#[derive(Default)]
pub struct LegendSources {
    sources: Vec<Box<dyn LegendSource>>,
}

impl LegendSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain described by configuration: the legend directory
    /// (when set) first, then the bundled legends (when enabled).
    pub fn from_config(config: &IconConfig) -> Self {
        let mut sources = Self::new();
        if let Some(dir) = config.resolved_legend_dir() {
            log::info!("Using legend directory {}", dir.display());
            sources.push(DirectoryLegends::new(dir));
        }
        if config.use_bundled_legends {
            sources.push(BundledLegends);
        }
        sources
    }

    pub fn push(&mut self, source: impl LegendSource + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn with(mut self, source: impl LegendSource + 'static) -> Self {
        self.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl LegendSource for LegendSources {
    fn specifiers(&self) -> Vec<FontSpecifier> {
        let mut specifiers: Vec<FontSpecifier> = self
            .sources
            .iter()
            .flat_map(|source| source.specifiers())
            .collect();
        specifiers.sort();
        specifiers.dedup();
        specifiers
    }

    fn read(&self, specifier: &FontSpecifier) -> Result<Legend, LegendError> {
        for source in &self.sources {
            match source.read(specifier) {
                Err(LegendError::FontNotFound(_)) => continue,
                result => return result,
            }
        }
        Err(LegendError::FontNotFound(specifier.clone()))
    }
}
