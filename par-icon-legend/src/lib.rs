//! Icon font legend resolution for par-icon.
//!
//! This crate provides:
//! - Font specifiers and key parsing (`fa-beer` → `fa` + `beer`)
//! - Legends: per-font tables mapping base keys to unicode codepoints
//! - Legend sources: bundled YAML tables and on-disk legend directories
//! - A thread-safe, load-once legend cache with per-context font registration
//!
//! # Architecture
//!
//! The `LegendCache` owns a `SpecifierRegistry` (which prefixes are known and
//! which specifier is the default) and a `LegendSource` chain. Legends are read
//! from the source on first use of a specifier and kept for the lifetime of the
//! cache. Hosts own the cache and pass it alongside their rendering context.

pub mod cache;
pub mod error;
pub mod legend;
pub mod source;
pub mod specifier;

// Re-export main types for convenience
pub use cache::{ContextId, FontRegistrar, LegendCache, ResolvedIcon};
pub use error::LegendError;
pub use legend::Legend;
pub use source::{BundledLegends, DirectoryLegends, LegendSource, LegendSources};
pub use specifier::{FontSpecifier, KeyParts, SpecifierRegistry};
