//! Inline icon tags for par-icon.
//!
//! Scans text such as `"<icon color=\"0099FF\">fa-beer</icon> please"` for
//! icon tags, resolves each tag's key through a [`LegendCache`], and produces
//! an ordered list of [`Segment`]s. The segments can be re-emitted as
//! formatted-text markup in which every icon becomes a font override:
//!
//! ```text
//! <font name="fa"><color rgb="0099FF">\u{f0fc}</color></font> please
//! ```
//!
//! Only one flat tag is recognized. Tags never nest, and anything that does
//! not form a complete `<icon ...>key</icon>` stays literal text.
//!
//! [`LegendCache`]: par_icon_legend::LegendCache

pub mod markup;
pub mod scanner;
pub mod segment;
pub mod tag;

pub use markup::to_markup;
pub use scanner::format;
pub use segment::{IconRef, Segment, plain_text};
pub use tag::{Tag, scan_tags};
