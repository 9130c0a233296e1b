//! Shared integration test helpers for par-icon.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use par_icon::{
    ContextId, FontRegistrar, FontSpecifier, RenderContext, RenderError, RenderOptions,
};
use parking_lot::Mutex;
use tempfile::TempDir;

pub const BODY_FONT: &str = "Times-Roman";

/// A host call observed by [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetFont(String),
    Text {
        font: String,
        text: String,
        options: RenderOptions,
    },
    FormattedText {
        font: String,
        markup: String,
        options: RenderOptions,
    },
}

/// Rendering context that records every call, optionally failing text runs.
pub struct RecordingContext {
    id: ContextId,
    font: String,
    pub calls: Vec<Call>,
    registrations: Mutex<Vec<(FontSpecifier, PathBuf)>>,
    fail_text: bool,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            id: ContextId::next(),
            font: BODY_FONT.to_string(),
            calls: Vec::new(),
            registrations: Mutex::new(Vec::new()),
            fail_text: false,
        }
    }

    /// A context whose `text` and `formatted_text` calls fail.
    pub fn failing() -> Self {
        Self {
            fail_text: true,
            ..Self::new()
        }
    }

    pub fn registrations(&self) -> Vec<(FontSpecifier, PathBuf)> {
        self.registrations.lock().clone()
    }
}

impl FontRegistrar for RecordingContext {
    fn context_id(&self) -> ContextId {
        self.id
    }

    fn register_font(&self, specifier: &FontSpecifier, path: &Path) {
        self.registrations
            .lock()
            .push((specifier.clone(), path.to_path_buf()));
    }
}

impl RenderContext for RecordingContext {
    type Content = String;

    fn font(&self) -> String {
        self.font.clone()
    }

    fn set_font(&mut self, name: &str) {
        self.font = name.to_string();
        self.calls.push(Call::SetFont(name.to_string()));
    }

    fn text(&mut self, text: &str, options: &RenderOptions) -> Result<(), RenderError> {
        if self.fail_text {
            return Err(RenderError::Host("out of page".to_string()));
        }
        self.calls.push(Call::Text {
            font: self.font.clone(),
            text: text.to_string(),
            options: options.clone(),
        });
        Ok(())
    }

    fn tokenize(&self, markup: &str) -> String {
        markup.to_string()
    }

    fn formatted_text(
        &mut self,
        content: String,
        options: &RenderOptions,
    ) -> Result<(), RenderError> {
        if self.fail_text {
            return Err(RenderError::Host("out of page".to_string()));
        }
        self.calls.push(Call::FormattedText {
            font: self.font.clone(),
            markup: content,
            options: options.clone(),
        });
        Ok(())
    }
}

/// Creates a legend directory holding one family with a font file stub.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn legend_dir_with_font(specifier: &str, yaml: &str, font_file: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join(specifier);
    fs::create_dir_all(&dir).expect("Failed to create legend dir");
    fs::write(dir.join(format!("{specifier}.yml")), yaml).expect("Failed to write legend");
    fs::write(dir.join(font_file), b"").expect("Failed to write font stub");
    temp_dir
}
