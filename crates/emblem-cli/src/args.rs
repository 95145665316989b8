//! Command-line argument definitions for the Emblem CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control palette and background selection,
//! document options, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Emblem logo tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in palette (traditional, canon2020, cb-qual-paired-n7, cb-qual-set1-n7)
    #[arg(short, long, default_value = "canon2020")]
    pub palette: String,

    /// Background selection (light, dark, transparent); overrides the config file
    #[arg(short, long)]
    pub background: Option<String>,

    /// Text placed inside the root concept node
    #[arg(long)]
    pub root_text: Option<String>,

    /// Label set for the child nodes (none, greek, bullets)
    #[arg(long, default_value = "none")]
    pub labels: String,

    /// Conversion format requested from the typesetting engine (png, svg, jpg)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Navigation-variant text; separate lines with '|'
    #[arg(long)]
    pub nav_text: Option<String>,

    /// Path to the output TeX file
    #[arg(short, long, default_value = "logo.tex")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
