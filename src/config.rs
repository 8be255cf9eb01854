//! Configuration management for the event tracker
//!
//! Centralizes configuration options and provides validation.

use crate::cli::Args;
use crate::error::SyncError;
use serde::{Deserialize, Serialize};

/// Default chrono pattern for `yyyy/MM/dd HH:mm` timestamps
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Prompt shown at the start of each loop iteration
    pub prompt: String,
    /// chrono format used to parse and display event timestamps
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            prompt: "> ".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SyncError> {
        let config = Self {
            debug: args.debug,
            prompt: args.prompt.clone(),
            date_format: args.date_format.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.prompt.is_empty() {
            return Err(SyncError::validation("Prompt must not be empty"));
        }
        if !self.date_format.contains('%') {
            return Err(SyncError::validation(format!(
                "Date format '{}' contains no format specifiers",
                self.date_format
            )));
        }
        Ok(())
    }
}
