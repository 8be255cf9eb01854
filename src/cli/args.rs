//! Command-line argument parsing and validation

use crate::config::DEFAULT_DATE_FORMAT;
use clap::Parser;

/// eventsync - An interactive command-line tracker for personal events
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "eventsync")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Prompt shown before each command
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// chrono format used for event timestamps
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
