//! Command-line interface for par-icon.
//!
//! Every subcommand runs against a [`HeadlessContext`], so the output shows
//! what a host renderer would be handed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use log::LevelFilter;
use par_icon_config::IconConfig;
use par_icon_inline::Segment;
use par_icon_legend::{FontSpecifier, LegendCache};

use crate::headless::HeadlessContext;
use crate::options::RenderOptions;
use crate::request::{Icon, InlineText};

/// par-icon - Resolve icon-font keys and inline icon tags
#[derive(Parser, Debug)]
#[command(name = "par-icon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/par-icon/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an icon key to its font and codepoint
    Resolve {
        /// Icon key, e.g. fa-beer
        key: String,

        /// Font specifier to use regardless of the key prefix
        #[arg(long, value_name = "SPEC")]
        set: Option<String>,
    },

    /// Expand <icon> tags in text
    Inline {
        /// Text containing <icon>key</icon> tags
        text: String,

        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an icon as table cell data (JSON)
    Cell {
        /// Icon key, e.g. fa-beer
        key: String,

        /// Font specifier to use regardless of the key prefix
        #[arg(long, value_name = "SPEC")]
        set: Option<String>,

        /// Text color as hex RGB
        #[arg(long, value_name = "HEX")]
        color: Option<String>,

        /// Font size in points
        #[arg(long, value_name = "POINTS")]
        size: Option<f32>,
    },

    /// List the icons of a font, or the known fonts
    List {
        /// Font specifier (default specifier when omitted)
        specifier: Option<String>,

        /// List known font specifiers instead of icons
        #[arg(long)]
        specifiers: bool,
    },
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level '{s}'"))
}

/// Logger for the binary: `--log-level` when given, otherwise `env`.
///
/// The flag replaces the environment filter entirely, module directives
/// included.
pub fn build_logger(level: Option<LevelFilter>, env: Env<'_>) -> Builder {
    match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(env.default_filter_or("warn")),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<IconConfig> {
    match path {
        Some(path) => IconConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => IconConfig::load().context("Failed to load config"),
    }
}

/// Run a parsed command line, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let cache = LegendCache::from_config(&config);
    let mut ctx = HeadlessContext::new();

    match &cli.command {
        Commands::Resolve { key, set } => {
            let mut options = RenderOptions::new();
            options.specifier = set.clone();
            let icon = Icon::new(&cache, &ctx, key, options)?;
            icon.render(&mut ctx)?;
            let resolved = icon.resolved();
            writeln!(
                out,
                "{}\t{}\tU+{:04X}\t{}",
                resolved.specifier,
                resolved.base_key,
                resolved.codepoint as u32,
                resolved.codepoint
            )?;
        }
        Commands::Inline { text, json } => {
            let inline = InlineText::new(&cache, &ctx, text, RenderOptions::new())?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(inline.segments())?)?;
            } else {
                inline.render(&mut ctx)?;
                for segment in inline.segments() {
                    match segment {
                        Segment::Literal(text) => writeln!(out, "text\t{text:?}")?,
                        Segment::Icon(icon) => writeln!(
                            out,
                            "icon\t{}\tU+{:04X}\t{}",
                            icon.specifier, icon.codepoint as u32, icon.key
                        )?,
                    }
                }
                writeln!(out, "{}", inline.markup())?;
            }
        }
        Commands::Cell {
            key,
            set,
            color,
            size,
        } => {
            let options = RenderOptions {
                color: color.clone(),
                size: *size,
                specifier: set.clone(),
                ..RenderOptions::default()
            };
            let cell = Icon::new(&cache, &ctx, key, options)?.to_cell_data();
            writeln!(out, "{}", serde_json::to_string_pretty(&cell)?)?;
        }
        Commands::List {
            specifier,
            specifiers,
        } => {
            if *specifiers {
                let default = cache.registry().default_specifier();
                for known in cache.known_specifiers() {
                    let marker = if &known == default { " (default)" } else { "" };
                    writeln!(out, "{known}{marker}")?;
                }
            } else {
                let specifier = specifier
                    .as_deref()
                    .map(FontSpecifier::from)
                    .unwrap_or_else(|| cache.registry().default_specifier().clone());
                let legend = cache.load(&ctx, &specifier)?;
                for (key, codepoint) in legend.entries() {
                    writeln!(
                        out,
                        "{}{}\tU+{:04X}",
                        specifier.key_prefix(),
                        key,
                        codepoint as u32
                    )?;
                }
            }
        }
    }

    for run in ctx.runs() {
        log::debug!("{run}");
    }
    Ok(())
}
