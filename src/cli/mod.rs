//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// Ringo - look up Apple devices by model number, name, and attributes
#[derive(Parser, Debug)]
#[command(name = "ringo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", value_enum)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/ringo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the per-category JSON catalogs
    #[arg(long, global = true, env = "RINGO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Output format requested on the command line, if any.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format
    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.plain {
            return Some(OutputFormat::Plain);
        }
        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }
        if self.machine {
            return Some(OutputFormat::Json);
        }
        None
    }

    /// Forced color setting for `format`, or `None` to auto-detect.
    ///
    /// Formats without styling never get colors, whatever `--color` says.
    #[must_use]
    pub fn colors_for(&self, format: OutputFormat) -> Option<bool> {
        if !format.use_colors() {
            return Some(false);
        }
        match self.color {
            Some(ColorMode::Always) => Some(true),
            Some(ColorMode::Never) => Some(false),
            Some(ColorMode::Auto) | None => None,
        }
    }

    /// Apply the color setting for `format` to the terminal styling backend.
    pub fn apply_color_mode(&self, format: OutputFormat) {
        if let Some(enabled) = self.colors_for(format) {
            console::set_colors_enabled(enabled);
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List device categories and their filters
    Categories(commands::categories::CategoriesArgs),

    /// Show the filter values available for a category
    Filters(commands::filters::FiltersArgs),

    /// Search a category by model number or name
    Search(commands::search::SearchArgs),
}
