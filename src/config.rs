//! Configuration Module
//!
//! Parses command-line arguments and validates the simulator configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{CacheError, Result};

// == Command Line ==
/// Simulates a one- or two-level LRU cache over the words of a trace file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Print the final contents of each cache level
    #[arg(long, global = true)]
    pub show_contents: bool,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Single first-level cache
    #[command(name = "1")]
    Single {
        /// Number of entries in the level-1 cache
        size: usize,
        /// Trace file of whitespace-separated words
        trace: PathBuf,
    },
    /// First-level cache backed by a second-level cache
    #[command(name = "2")]
    TwoLevel {
        /// Number of entries in the level-1 cache
        size1: usize,
        /// Number of entries in the level-2 cache (at least size1)
        size2: usize,
        /// Trace file of whitespace-separated words
        trace: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

// == Config ==
/// Validated simulator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entries in the level-1 cache
    pub l1_size: usize,
    /// Entries in the level-2 cache; None for a single-level run
    pub l2_size: Option<usize>,
    /// Trace file to read
    pub trace_path: PathBuf,
    pub format: OutputFormat,
    pub show_contents: bool,
}

impl Config {
    /// Builds a Config from parsed arguments and validates it.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let (l1_size, l2_size, trace_path) = match cli.mode {
            Mode::Single { size, trace } => (size, None, trace),
            Mode::TwoLevel {
                size1,
                size2,
                trace,
            } => (size1, Some(size2), trace),
        };

        let config = Self {
            l1_size,
            l2_size,
            trace_path,
            format: cli.format,
            show_contents: cli.show_contents,
        };
        config.validate()?;
        Ok(config)
    }

    // == Validation ==
    /// Rejects empty caches and an L2 smaller than L1.
    pub fn validate(&self) -> Result<()> {
        validate_sizes(self.l1_size, self.l2_size)
    }

    pub fn is_two_level(&self) -> bool {
        self.l2_size.is_some()
    }
}

/// Checks cache sizes independently of any trace file.
pub fn validate_sizes(l1_size: usize, l2_size: Option<usize>) -> Result<()> {
    if l1_size == 0 {
        return Err(CacheError::InvalidConfig(
            "level-1 cache size must be greater than 0".to_string(),
        ));
    }
    if let Some(l2_size) = l2_size {
        if l2_size < l1_size {
            return Err(CacheError::InvalidConfig(format!(
                "level-2 cache size ({}) must be greater than or equal to level-1 cache size ({})",
                l2_size, l1_size
            )));
        }
    }
    Ok(())
}
