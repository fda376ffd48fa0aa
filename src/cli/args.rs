//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::core::ViewEvent;
use crate::error::AppError;

use super::commands::{Commands, ShowArgs};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "pricetab")]
#[command(about = "Sortable, filterable LLM pricing table", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Sort/filter flags given before the subcommand
    #[command(flatten)]
    pub(crate) show: ShowArgs,

    /// Pricing data file (JSON array); the bundled dataset is used when unset
    #[arg(short, long, global = true, env = "PRICETAB_DATA", value_name = "PATH")]
    pub(crate) data: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true, conflicts_with = "csv")]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for cost formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Directory prefix for provider icons
    #[arg(long, global = true, value_name = "BASE")]
    pub(crate) icon_base: Option<String>,

    /// Add an icon path column to the table
    #[arg(long, global = true)]
    pub(crate) show_icons: bool,

    /// Fixed table width in columns (defaults to the terminal width)
    #[arg(long, global = true, value_name = "COLS")]
    pub(crate) width: Option<u16>,

    /// Date the prices were collected (YYYYMMDD or YYYY-MM-DD), shown in the caption
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) scraped_on: Option<String>,

    /// Free-form note appended to the caption (e.g., "For US-East unless otherwise stated")
    #[arg(long, global = true, value_name = "TEXT")]
    pub(crate) region_note: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.show_icons && config.show_icons {
            self.show_icons = true;
        }

        if let Some(color) = config.color {
            if self.color == ColorMode::Auto {
                self.color = match color {
                    ConfigColorMode::Auto => ColorMode::Auto,
                    ConfigColorMode::Always => ColorMode::Always,
                    ConfigColorMode::Never => ColorMode::Never,
                };
            }
        }

        // Value options: only apply if CLI (or env) didn't set them
        if self.data.is_none() {
            self.data = config.data.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        if self.icon_base.is_none() {
            self.icon_base = config.icon_base.clone();
        }
        if self.scraped_on.is_none() {
            self.scraped_on = config.scraped_on.clone();
        }
        if self.region_note.is_none() {
            self.region_note = config.region_note.clone();
        }

        self
    }

    /// Events that seed the view: top-level `--sort`/`--filter` first, then the
    /// `show` subcommand's own. `providers` has no view and rejects them.
    pub(crate) fn view_events(&self) -> Result<Vec<ViewEvent>, AppError> {
        let mut events = self.show.events();
        match &self.command {
            None | Some(Commands::Session) => {}
            Some(Commands::Show(args)) => events.extend(args.events()),
            Some(Commands::Providers) => {
                if !self.show.is_empty() {
                    return Err(AppError::ViewFlagsUnsupported {
                        command: "providers",
                    });
                }
            }
        }
        Ok(events)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
