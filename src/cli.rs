//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros.
//! This module defines the [`OutputFormat`] enum and the [`Args`] struct
//! with its validation logic.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::debounce::{DEFAULT_DEBOUNCE_MS, MAX_DEBOUNCE_MS};
use crate::display::{ContentMode, DEFAULT_PREVIEW_CHARS};

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered titles with content previews
    Text,
    /// JSON array of {name, content}
    Json,
    /// RFC 4180 CSV with a name,content header
    Csv,
}

/// Command-line arguments for the prompt library.
///
/// Use the `validate()` method after parsing to ensure argument combinations are valid.
///
/// # Example
///
/// ```rust,ignore
/// use clap::Parser;
/// use prompt_library::cli::Args;
///
/// let args = Args::parse();
/// args.validate()?;
/// ```
#[derive(Parser, Debug)]
#[command(name = "prompt-library")]
#[command(about = "Search a CSV prompt library")]
#[command(version)]
pub struct Args {
    /// Prompt library CSV file (name,content)
    #[arg(long)]
    pub file: PathBuf,

    /// Search term (case-insensitive substring over name and content)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Read search terms from stdin, one per line
    #[arg(long, default_value = "false")]
    pub interactive: bool,

    /// Print a decode report instead of searching
    #[arg(long, default_value = "false")]
    pub stats: bool,

    /// With --stats, fail if any line or record was dropped
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print full prompt content instead of previews
    #[arg(long, default_value = "false")]
    pub full: bool,

    /// Preview length in characters
    #[arg(long, default_value_t = DEFAULT_PREVIEW_CHARS)]
    pub preview_chars: usize,

    /// Quiet period before an interactive search is applied, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Write results to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Validate argument combinations.
    ///
    /// - `--interactive` cannot be combined with `--query`, `--stats` or `--output`,
    ///   and only works with the text format
    /// - `--stats` cannot be combined with `--query`
    /// - `--strict` requires `--stats`
    /// - `--preview-chars` must be positive
    /// - `--debounce-ms` must not exceed 10000
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the argument combination is valid
    /// - `Err(String)` with a descriptive error message if validation fails
    pub fn validate(&self) -> Result<(), String> {
        if self.preview_chars == 0 {
            return Err("--preview-chars must be greater than 0".to_string());
        }

        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(format!(
                "Invalid --debounce-ms: {}. Must be at most {}.",
                self.debounce_ms, MAX_DEBOUNCE_MS
            ));
        }

        if self.strict && !self.stats {
            return Err("--strict requires --stats".to_string());
        }

        if self.stats && self.query.is_some() {
            return Err("--stats cannot be used with --query".to_string());
        }

        if self.interactive {
            if self.query.is_some() {
                return Err("--interactive cannot be used with --query".to_string());
            }
            if self.stats {
                return Err("--interactive cannot be used with --stats".to_string());
            }
            if self.output.is_some() {
                return Err("--interactive cannot be used with --output".to_string());
            }
            if self.format != OutputFormat::Text {
                return Err("--interactive only supports --format text".to_string());
            }
        }

        Ok(())
    }

    /// How much content to print per record in text output.
    pub fn content_mode(&self) -> ContentMode {
        if self.full {
            ContentMode::Full
        } else {
            ContentMode::Preview(self.preview_chars)
        }
    }

    /// The interactive debounce delay.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
