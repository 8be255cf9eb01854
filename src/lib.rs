//! # eventsync
//!
//! An interactive command-line tracker for personal events. The binary
//! runs a read-eval-print loop over an in-memory event list: events are
//! added, listed, duplicated, edited, searched and deleted with short
//! line-oriented commands.
//!
//! ## Features
//!
//! - Line-oriented command grammar with case-insensitive keywords
//! - Pipe-separated event details with `yyyy/MM/dd HH:mm` timestamps
//! - Centralized index bounds checking with descriptive errors
//! - Injectable line input for deterministic session tests
//!
//! ## Example
//!
//! ```no_run
//! use eventsync::{cli, config::Config};
//!
//! let config = Config::default();
//! cli::run(&config)?;
//! # Ok::<(), eventsync::error::SyncError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
