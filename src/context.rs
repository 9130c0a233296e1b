//! Host rendering context capabilities.
//!
//! par-icon never draws anything itself. A host implements [`RenderContext`]
//! over its document or canvas and receives codepoints, font names, and
//! formatted-text markup from the icon request types.

use std::ops::{Deref, DerefMut};

use par_icon_legend::FontRegistrar;

use crate::error::RenderError;
use crate::options::RenderOptions;

/// Text rendering capabilities of a host document.
pub trait RenderContext: FontRegistrar {
    /// Renderable structure produced by the host's formatted-text tokenizer.
    type Content;

    /// Name of the font currently selected.
    fn font(&self) -> String;

    fn set_font(&mut self, name: &str);

    /// Render a text run at the cursor with the current font.
    fn text(&mut self, text: &str, options: &RenderOptions) -> Result<(), RenderError>;

    /// Tokenize markup containing formatting tags, including `<font>` and
    /// `<color>` overrides.
    fn tokenize(&self, markup: &str) -> Self::Content;

    /// Render tokenized formatted text at the cursor.
    fn formatted_text(
        &mut self,
        content: Self::Content,
        options: &RenderOptions,
    ) -> Result<(), RenderError>;
}

/// Selects a font for as long as the scope lives.
///
/// The previously selected font is restored on drop, including when the
/// render call inside the scope fails or panics.
pub struct FontScope<'a, C: RenderContext + ?Sized> {
    context: &'a mut C,
    previous: String,
}

impl<'a, C: RenderContext + ?Sized> FontScope<'a, C> {
    pub fn new(context: &'a mut C, font: &str) -> Self {
        let previous = context.font();
        context.set_font(font);
        Self { context, previous }
    }
}

impl<C: RenderContext + ?Sized> Deref for FontScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: RenderContext + ?Sized> DerefMut for FontScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: RenderContext + ?Sized> Drop for FontScope<'_, C> {
    fn drop(&mut self) {
        self.context.set_font(&self.previous);
    }
}
