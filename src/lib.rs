//! par-icon: icon-font glyphs for document renderers.
//!
//! Resolves keys such as `fa-beer` to a font family and codepoint, expands
//! `<icon>` tags in text into formatted-text markup, and drives a host
//! [`RenderContext`] to draw the result.
//!
//! Legend loading and caching lives in `par-icon-legend`, tag scanning in
//! `par-icon-inline` and configuration in `par-icon-config`; the commonly
//! used types are re-exported here.

pub mod cli;
pub mod context;
pub mod error;
pub mod headless;
pub mod options;
pub mod request;

pub use context::{FontScope, RenderContext};
pub use error::RenderError;
pub use headless::HeadlessContext;
pub use options::{CellData, RenderOptions};
pub use request::{Icon, IconRequest, InlineText, parse_inline, resolve_icon, to_cell_data};

pub use par_icon_config::{ConfigError, IconConfig};
pub use par_icon_inline::{IconRef, Segment, plain_text};
pub use par_icon_legend::{
    ContextId, FontRegistrar, FontSpecifier, KeyParts, LegendCache, LegendError, ResolvedIcon,
};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
