//! Raw `<icon>` tag matching.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `<icon>` or `<icon attrs...>`, content without `<`, then `</icon>`.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<icon(\s[^>]*)?>([^<]*)</icon>").expect("Failed to compile icon tag regex")
});

/// `name="value"` or `name='value'`
static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("Failed to compile icon attribute regex")
});

/// One `<icon ...>key</icon>` occurrence before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Byte range of the whole tag in the scanned text
    pub range: Range<usize>,
    /// Text between the opening and closing tag, verbatim
    pub content: String,
    pub attributes: BTreeMap<String, String>,
}

impl Tag {
    /// The icon key with surrounding whitespace removed.
    pub fn key(&self) -> &str {
        self.content.trim()
    }
}

/// Find every complete icon tag in `text`, left to right.
pub fn scan_tags(text: &str) -> Vec<Tag> {
    TAG_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attributes = caps
                .get(1)
                .map(|attrs| parse_attributes(attrs.as_str()))
                .unwrap_or_default();
            Some(Tag {
                range: whole.range(),
                content: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                attributes,
            })
        })
        .collect()
}

/// Parse the attribute list of an opening tag. Unparseable text is ignored.
fn parse_attributes(attrs: &str) -> BTreeMap<String, String> {
    ATTR_REGEX
        .captures_iter(attrs)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
            Some((name, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag() {
        let tags = scan_tags("<icon>fa-beer</icon> now");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].range, 0..20);
        assert_eq!(tags[0].key(), "fa-beer");
        assert!(tags[0].attributes.is_empty());
    }

    #[test]
    fn test_attributes_both_quote_styles() {
        let tags = scan_tags(r#"<icon color="0099FF" size='20'>fa-arrows</icon>"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].attributes.get("color").map(String::as_str), Some("0099FF"));
        assert_eq!(tags[0].attributes.get("size").map(String::as_str), Some("20"));
    }

    #[test]
    fn test_case_insensitive_tag_name() {
        let tags = scan_tags("<ICON>fa-beer</Icon>");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key(), "fa-beer");
    }

    #[test]
    fn test_content_whitespace_kept_raw() {
        let tags = scan_tags("<icon> fa-beer </icon>");
        assert_eq!(tags[0].content, " fa-beer ");
        assert_eq!(tags[0].key(), "fa-beer");
    }

    #[test]
    fn test_similar_tag_names_ignored() {
        assert!(scan_tags("<iconic>fa-beer</iconic>").is_empty());
        assert!(scan_tags("<iconic>fa-beer</icon>").is_empty());
    }

    #[test]
    fn test_unclosed_and_stray_tags_ignored() {
        assert!(scan_tags("<icon>fa-beer").is_empty());
        assert!(scan_tags("fa-beer</icon>").is_empty());
        assert!(scan_tags("a < b > c").is_empty());
    }

    #[test]
    fn test_unclosed_before_complete_tag() {
        let text = "<icon>fa-beer <icon>fa-arrows</icon>";
        let tags = scan_tags(text);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key(), "fa-arrows");
        assert_eq!(&text[tags[0].range.clone()], "<icon>fa-arrows</icon>");
    }

    #[test]
    fn test_multiline_content() {
        let tags = scan_tags("<icon>\nfa-beer\n</icon>");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key(), "fa-beer");
    }
}
