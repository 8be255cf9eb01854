//! In-memory event collection
//!
//! Owns the ordered event sequence for the lifetime of the process.
//! Every index-based operation performs its own bounds check so callers
//! all get the same out-of-range error, wherever the index came from.

use crate::core::event::Event;
use crate::error::{Result, SyncError};
use tracing::debug;

/// Ordered collection of events (insertion order = display order)
#[derive(Debug, Default)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    /// Create a new empty manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the end of the list
    pub fn add(&mut self, event: Event) {
        debug!("Adding event: {}", event.name);
        self.events.push(event);
    }

    /// Remove and return the event at `index` (0-based)
    pub fn remove(&mut self, index: usize) -> Result<Event> {
        self.check_bounds(index)?;
        let event = self.events.remove(index);
        debug!("Removed event: {}", event.name);
        Ok(event)
    }

    /// Get the event at `index` (0-based)
    pub fn get(&self, index: usize) -> Result<&Event> {
        self.check_bounds(index)?;
        Ok(&self.events[index])
    }

    /// Get a mutable reference to the event at `index` (0-based)
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Event> {
        self.check_bounds(index)?;
        Ok(&mut self.events[index])
    }

    /// The full ordered sequence
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in the list
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events whose description contains `keyword`, case-insensitively,
    /// in original order
    pub fn find(&self, keyword: &str) -> Vec<&Event> {
        let needle = keyword.to_lowercase();
        let matches: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.description_matches(&needle))
            .collect();
        debug!("Keyword '{}' matched {} event(s)", keyword, matches.len());
        matches
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.events.len() {
            return Err(SyncError::invalid_index(
                index as i64 + 1,
                self.events.len(),
            ));
        }
        Ok(())
    }
}
