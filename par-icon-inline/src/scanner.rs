//! Tag scanning and per-tag resolution.

use par_icon_legend::{FontRegistrar, LegendCache, LegendError};

use crate::segment::{IconRef, Segment};
use crate::tag::scan_tags;

/// Split `text` into literal and icon segments, resolving every icon tag.
///
/// Text between tags is kept byte for byte. Incomplete tags are literal text.
/// A tag whose key cannot be resolved fails the whole call with the
/// resolver's error.
pub fn format<R>(cache: &LegendCache, context: &R, text: &str) -> Result<Vec<Segment>, LegendError>
where
    R: FontRegistrar + ?Sized,
{
    let mut segments = Vec::new();
    let mut cursor = 0;

    for tag in scan_tags(text) {
        if tag.range.start > cursor {
            segments.push(Segment::literal(&text[cursor..tag.range.start]));
        }

        let resolved = cache.resolve(context, tag.key(), None)?;
        log::debug!(
            "Inline icon '{}' -> {} U+{:04X}",
            tag.content,
            resolved.specifier,
            resolved.codepoint as u32
        );
        segments.push(Segment::Icon(IconRef {
            codepoint: resolved.codepoint,
            specifier: resolved.specifier,
            attributes: tag.attributes,
            key: tag.content,
        }));

        cursor = tag.range.end;
    }

    if cursor < text.len() {
        segments.push(Segment::literal(&text[cursor..]));
    }

    Ok(segments)
}
