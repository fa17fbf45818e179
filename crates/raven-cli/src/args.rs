//! Command-line argument definitions for the Raven CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, row length, drawing traces and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Raven matrix tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input figure document
    #[arg(help = "Path to the input file (TOML)")]
    pub input: String,

    /// Path to the output row document
    #[arg(short, long, default_value = "row.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of figures to generate; defaults to the configured matrix size
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Print the drawing calls made for every generated figure
    #[arg(long)]
    pub trace: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
