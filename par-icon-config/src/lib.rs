//! Configuration system for par-icon.
//!
//! This crate provides configuration loading and default values for
//! icon font resolution. It includes:
//!
//! - The registry of recognized font specifiers and the default specifier
//! - The location of on-disk legend data
//! - Validation of user supplied values

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::IconConfig;
pub use error::ConfigError;
