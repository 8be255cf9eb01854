//! Event record and detail-line parsing
//!
//! An event is a plain record; identity is its position in the owning
//! list, so there is no id field and duplicate entries are allowed.

use crate::error::{Result, SyncError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of pipe-separated fields in an event details line
const DETAIL_FIELDS: usize = 5;

/// A single tracked event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Event name
    pub name: String,
    /// Start time (naive local time)
    pub start: NaiveDateTime,
    /// End time (naive local time)
    pub end: NaiveDateTime,
    /// Location
    pub location: String,
    /// Free-form description
    pub description: String,
}

impl Event {
    /// Create a new event
    pub fn new(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            location: location.into(),
            description: description.into(),
        }
    }

    /// Parse a `name | start | end | location | description` details line
    ///
    /// Requires exactly five pipe-separated fields; each field is trimmed
    /// and both timestamps must match `date_format`. Any deviation
    /// collapses to the generic invalid-details error, with the timestamp
    /// parse failure kept as the error source.
    pub fn parse_details(line: &str, date_format: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split('|').collect();

        if parts.len() != DETAIL_FIELDS {
            debug!("Expected {} fields, got {}", DETAIL_FIELDS, parts.len());
            return Err(SyncError::invalid_event_details());
        }

        let start = NaiveDateTime::parse_from_str(parts[1].trim(), date_format)
            .map_err(|e| SyncError::InvalidEventDetails { source: Some(e) })?;
        let end = NaiveDateTime::parse_from_str(parts[2].trim(), date_format)
            .map_err(|e| SyncError::InvalidEventDetails { source: Some(e) })?;

        if end <= start {
            // Accepted, but worth flagging in the logs.
            warn!("Event does not end after it starts: {} >= {}", start, end);
        }

        Ok(Self::new(
            parts[0].trim(),
            start,
            end,
            parts[3].trim(),
            parts[4].trim(),
        ))
    }

    /// Copy this event under a new name, all other fields identical
    pub fn duplicate_as(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            ..self.clone()
        }
    }

    /// Whether the description contains `keyword`, case-insensitively
    ///
    /// The caller is expected to pass an already-lowercased keyword.
    pub fn description_matches(&self, keyword: &str) -> bool {
        self.description.to_lowercase().contains(keyword)
    }
}
