//! A rendering context that records text runs instead of drawing them.
//!
//! Used by the `par-icon` binary to show what a host would be asked to do.

use std::fmt;
use std::path::{Path, PathBuf};

use par_icon_legend::{ContextId, FontRegistrar, FontSpecifier};
use parking_lot::Mutex;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::options::RenderOptions;

pub const DEFAULT_FONT: &str = "Helvetica";

/// One `text` or `formatted_text` call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub font: String,
    pub text: String,
    pub formatted: bool,
}

impl fmt::Display for TextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.formatted { "formatted" } else { "text" };
        write!(f, "[{}] {} {:?}", self.font, kind, self.text)
    }
}

#[derive(Debug)]
pub struct HeadlessContext {
    id: ContextId,
    font: String,
    runs: Vec<TextRun>,
    registered: Mutex<Vec<(FontSpecifier, PathBuf)>>,
}

impl HeadlessContext {
    pub fn new() -> Self {
        Self {
            id: ContextId::next(),
            font: DEFAULT_FONT.to_string(),
            runs: Vec::new(),
            registered: Mutex::new(Vec::new()),
        }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn registered_fonts(&self) -> Vec<(FontSpecifier, PathBuf)> {
        self.registered.lock().clone()
    }
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistrar for HeadlessContext {
    fn context_id(&self) -> ContextId {
        self.id
    }

    fn register_font(&self, specifier: &FontSpecifier, path: &Path) {
        log::info!("Headless context: font '{}' -> {}", specifier, path.display());
        self.registered
            .lock()
            .push((specifier.clone(), path.to_path_buf()));
    }
}

impl RenderContext for HeadlessContext {
    type Content = String;

    fn font(&self) -> String {
        self.font.clone()
    }

    fn set_font(&mut self, name: &str) {
        self.font = name.to_string();
    }

    fn text(&mut self, text: &str, _options: &RenderOptions) -> Result<(), RenderError> {
        self.runs.push(TextRun {
            font: self.font.clone(),
            text: text.to_string(),
            formatted: false,
        });
        Ok(())
    }

    fn tokenize(&self, markup: &str) -> String {
        markup.to_string()
    }

    fn formatted_text(
        &mut self,
        content: String,
        _options: &RenderOptions,
    ) -> Result<(), RenderError> {
        self.runs.push(TextRun {
            font: self.font.clone(),
            text: content,
            formatted: true,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Icon;
    use par_icon_legend::LegendCache;

    #[test]
    fn test_icon_render_records_run_and_restores_font() {
        let cache = LegendCache::default();
        let mut ctx = HeadlessContext::new();
        let icon = Icon::new(&cache, &ctx, "fa-beer", RenderOptions::new()).unwrap();
        icon.render(&mut ctx).unwrap();

        assert_eq!(
            ctx.runs(),
            &[TextRun {
                font: "fa".to_string(),
                text: "\u{f0fc}".to_string(),
                formatted: false,
            }]
        );
        assert_eq!(ctx.font(), DEFAULT_FONT);
    }

    #[test]
    fn test_run_display() {
        let run = TextRun {
            font: "fa".to_string(),
            text: "x".to_string(),
            formatted: true,
        };
        assert_eq!(run.to_string(), "[fa] formatted \"x\"");
    }

    #[test]
    fn test_registered_fonts_recorded() {
        let legends = tempfile::TempDir::new().unwrap();
        let dir = legends.path().join("fi");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("fi.yml"), "icons:\n  home: \"f16b\"\n").unwrap();
        std::fs::write(dir.join("foundation.otf"), b"").unwrap();

        let config = par_icon_config::IconConfig::new().with_legend_dir(legends.path());
        let cache = LegendCache::from_config(&config);
        let ctx = HeadlessContext::new();
        cache.resolve(&ctx, "fi-home", None).unwrap();
        cache.resolve(&ctx, "fa-beer", None).unwrap();

        assert_eq!(
            ctx.registered_fonts(),
            vec![(FontSpecifier::from("fi"), dir.join("foundation.otf"))]
        );
    }
}
