//! Icon requests: resolve a key (or inline text) once, render it many times.

use par_icon_inline::Segment;
use par_icon_legend::{FontRegistrar, FontSpecifier, LegendCache, LegendError, ResolvedIcon};

use crate::context::{FontScope, RenderContext};
use crate::error::RenderError;
use crate::options::{CellData, RenderOptions};

/// A single icon, resolved at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    resolved: ResolvedIcon,
    options: RenderOptions,
}

impl Icon {
    /// Resolve `key`, honoring an explicit `set` in `options`.
    ///
    /// # Errors
    ///
    /// Any [`LegendError`] from resolution. No host state is touched on
    /// failure apart from font registration of a successfully loaded legend.
    pub fn new<R>(
        cache: &LegendCache,
        context: &R,
        key: &str,
        options: RenderOptions,
    ) -> Result<Self, LegendError>
    where
        R: FontRegistrar + ?Sized,
    {
        let explicit = options.explicit_specifier();
        let resolved = cache.resolve(context, key, explicit.as_ref())?;
        Ok(Self { resolved, options })
    }

    pub fn resolved(&self) -> &ResolvedIcon {
        &self.resolved
    }

    pub fn specifier(&self) -> &FontSpecifier {
        &self.resolved.specifier
    }

    pub fn codepoint(&self) -> char {
        self.resolved.codepoint
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Draw the glyph with the icon font selected only for this call.
    pub fn render<C>(&self, context: &mut C) -> Result<(), RenderError>
    where
        C: RenderContext + ?Sized,
    {
        let mut scope = FontScope::new(context, self.specifier().as_str());
        scope.text(
            &self.codepoint().to_string(),
            &self.options.pass_through(),
        )
    }

    pub fn to_cell_data(&self) -> CellData {
        CellData::new(self.specifier().clone(), self.codepoint(), &self.options)
    }
}

/// Text with `<icon>` tags, resolved to formatted-text markup at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineText {
    segments: Vec<Segment>,
    markup: String,
    options: RenderOptions,
}

impl InlineText {
    pub fn new<R>(
        cache: &LegendCache,
        context: &R,
        text: &str,
        options: RenderOptions,
    ) -> Result<Self, LegendError>
    where
        R: FontRegistrar + ?Sized,
    {
        let segments = par_icon_inline::format(cache, context, text)?;
        let markup = par_icon_inline::to_markup(&segments);
        Ok(Self {
            segments,
            markup,
            options,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Formatted-text markup with each icon as a `<font>` override.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render<C>(&self, context: &mut C) -> Result<(), RenderError>
    where
        C: RenderContext + ?Sized,
    {
        let content = context.tokenize(&self.markup);
        context.formatted_text(content, &self.options.pass_through())
    }
}

/// Either a single icon or inline text, selected by [`RenderOptions::inline`].
#[derive(Debug, Clone, PartialEq)]
pub enum IconRequest {
    Icon(Icon),
    InlineText(InlineText),
}

impl IconRequest {
    /// Build a request; `input` is an icon key, or text with `<icon>` tags
    /// when `options.inline` is set.
    pub fn new<R>(
        cache: &LegendCache,
        context: &R,
        input: &str,
        options: RenderOptions,
    ) -> Result<Self, LegendError>
    where
        R: FontRegistrar + ?Sized,
    {
        if options.inline {
            InlineText::new(cache, context, input, options).map(Self::InlineText)
        } else {
            Icon::new(cache, context, input, options).map(Self::Icon)
        }
    }

    pub fn render<C>(&self, context: &mut C) -> Result<(), RenderError>
    where
        C: RenderContext + ?Sized,
    {
        match self {
            Self::Icon(icon) => icon.render(context),
            Self::InlineText(text) => text.render(context),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::InlineText(_))
    }
}

/// Resolve a key to its specifier and codepoint.
pub fn resolve_icon<R>(
    cache: &LegendCache,
    context: &R,
    key: &str,
    options: &RenderOptions,
) -> Result<ResolvedIcon, LegendError>
where
    R: FontRegistrar + ?Sized,
{
    let explicit = options.explicit_specifier();
    cache.resolve(context, key, explicit.as_ref())
}

/// Split text into literal and icon segments.
pub fn parse_inline<R>(
    cache: &LegendCache,
    context: &R,
    text: &str,
) -> Result<Vec<Segment>, LegendError>
where
    R: FontRegistrar + ?Sized,
{
    par_icon_inline::format(cache, context, text)
}

/// Resolve a key straight to table cell data.
pub fn to_cell_data<R>(
    cache: &LegendCache,
    context: &R,
    key: &str,
    options: RenderOptions,
) -> Result<CellData, LegendError>
where
    R: FontRegistrar + ?Sized,
{
    Icon::new(cache, context, key, options).map(|icon| icon.to_cell_data())
}
