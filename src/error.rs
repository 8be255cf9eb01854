//! Error types for the event tracker
//!
//! Provides structured error handling with context and proper error chains.

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for the event tracker
///
/// Every parse or command failure surfaces as one of these variants and
/// aborts only the current command; the interactive loop keeps running.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The entered keyword is not a known command
    #[error("Invalid command: '{input}'. Type add, delete, duplicate, edit, find, list or bye.")]
    InvalidCommand { input: String },

    /// Event details line with the wrong field count or an unparseable timestamp
    #[error(
        "Invalid event details. Use: name | yyyy/MM/dd HH:mm | yyyy/MM/dd HH:mm | location | description"
    )]
    InvalidEventDetails {
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// An index that is not a number
    #[error("Invalid index format. Use a number.")]
    InvalidIndexFormat {
        #[source]
        source: ParseIntError,
    },

    /// An index outside the current event list
    #[error("Invalid event index: {position}. The list has {len} event(s).")]
    InvalidIndex { position: i64, len: usize },

    /// Duplicate input that does not split into an index and a name
    #[error("Invalid duplicate command format. Use: <index> <new event name>")]
    InvalidDuplicateFormat,

    /// Failure while reading the index for an edit
    #[error("Error in editing event: {message}")]
    EditEvent { message: String },

    /// A find keyword that is empty after trimming
    #[error("Keyword empty! Use: find <keyword>")]
    EmptyKeyword,

    /// The input stream ended in the middle of a command
    #[error("Input stream closed")]
    InputClosed,

    /// Line editor failures
    #[error("Input error: {message}")]
    Input { message: String },

    /// Failures writing to the output sink
    #[error("Output error")]
    Io(#[from] std::io::Error),

    /// Configuration validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl SyncError {
    /// Create a new invalid-command error
    pub fn invalid_command(input: impl Into<String>) -> Self {
        Self::InvalidCommand {
            input: input.into(),
        }
    }

    /// Create a new invalid-event-details error without parse detail
    pub fn invalid_event_details() -> Self {
        Self::InvalidEventDetails { source: None }
    }

    /// Create a new invalid-index error from a 1-based position
    pub fn invalid_index(position: i64, len: usize) -> Self {
        Self::InvalidIndex { position, len }
    }

    /// Create a new edit error wrapping failure detail
    pub fn edit_event(message: impl Into<String>) -> Self {
        Self::EditEvent {
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SyncError>;
