//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Render delimited text as a box-drawing table
#[derive(Debug, Parser)]
#[command(name = "boxtable")]
#[command(about = "Render delimited text as a box-drawing table")]
#[command(version)]
pub struct Args {
    /// Input file; reads stdin when omitted or `-`.
    /// The first record is the header row.
    pub input: Option<PathBuf>,

    /// Cell delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Headline rendered above the header row (repeatable)
    #[arg(short = 'H', long = "headline")]
    pub headlines: Vec<String>,

    /// Spaces around every cell; overrides the config file
    #[arg(short, long)]
    pub padding: Option<usize>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Returns the input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
