//! Command-line argument definitions for the Correspondence Markup CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, render option overrides, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Correspondence Markup compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Correspondence Markup file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output HTML file
    #[arg(short, long, default_value = "out.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// HTML-escape item text in every block
    #[arg(long)]
    pub escaped: bool,

    /// Convert line feeds to `<br/>` in every block
    #[arg(long)]
    pub br: bool,

    /// Convert spaces outside tags to `&nbsp;` in every block
    #[arg(long)]
    pub nbsp: bool,
}
