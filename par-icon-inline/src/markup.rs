//! Re-emission of segments as formatted-text markup.
//!
//! Icons become font overrides the host's formatted-text tokenizer already
//! understands; literal text (including any other formatting tags) is
//! passed through untouched.

use crate::segment::{IconRef, Segment};

/// Render segments as markup with `<font>`/`<color>` overrides for icons.
pub fn to_markup(segments: &[Segment]) -> String {
    let mut markup = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => markup.push_str(text),
            Segment::Icon(icon) => push_icon(&mut markup, icon),
        }
    }
    markup
}

fn push_icon(markup: &mut String, icon: &IconRef) {
    markup.push_str("<font name=\"");
    push_escaped(markup, icon.specifier.as_str());
    markup.push('"');
    if let Some(size) = icon.attributes.get("size") {
        markup.push_str(" size=\"");
        push_escaped(markup, size);
        markup.push('"');
    }
    markup.push('>');

    let color = icon.attributes.get("color").map(|c| c.trim_start_matches('#'));
    if let Some(color) = color {
        markup.push_str("<color rgb=\"");
        push_escaped(markup, color);
        markup.push_str("\">");
    }
    markup.push(icon.codepoint);
    if color.is_some() {
        markup.push_str("</color>");
    }

    markup.push_str("</font>");
}

fn push_escaped(markup: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => markup.push_str("&quot;"),
            '&' => markup.push_str("&amp;"),
            '<' => markup.push_str("&lt;"),
            '>' => markup.push_str("&gt;"),
            c => markup.push(c),
        }
    }
}
