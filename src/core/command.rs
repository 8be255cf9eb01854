//! Command variants and their execution
//!
//! Each user intent is one enum variant holding only the data needed to
//! perform it. The dispatch is an exhaustive match, so a missing arm is
//! a compile error rather than a runtime default branch.

use crate::config::Config;
use crate::core::event::Event;
use crate::core::input::LineSource;
use crate::core::manager::EventManager;
use crate::error::{Result, SyncError};
use crate::ui::Ui;
use std::io::Write;
use tracing::{debug, instrument};

/// Whether the driver loop should keep running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A fully parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new event
    Add(Event),
    /// Remove the event at a 0-based index
    Delete(usize),
    /// Copy an existing event under a new name
    Duplicate { source: Event, new_name: String },
    /// Overwrite the fields of the event at a 0-based index
    Edit(usize),
    /// Print all events
    List,
    /// Print events whose description contains a keyword
    Find(String),
    /// End the session
    Bye,
}

impl Command {
    /// Execute this command against the event list and UI
    ///
    /// `input` is only consulted by variants that need follow-up lines
    /// (currently just `Edit`).
    #[instrument(skip(self, config, manager, ui, input))]
    pub fn execute<W: Write>(
        self,
        config: &Config,
        manager: &mut EventManager,
        ui: &mut Ui<W>,
        input: &mut dyn LineSource,
    ) -> Result<Flow> {
        match self {
            Command::Add(event) => {
                ui.show_added(&event)?;
                manager.add(event);
            }
            Command::Delete(index) => {
                let removed = manager.remove(index)?;
                ui.show_deleted(&removed)?;
            }
            Command::Duplicate { source, new_name } => {
                let copy = source.duplicate_as(new_name);
                ui.show_duplicated(&source.name, &copy)?;
                manager.add(copy);
            }
            Command::Edit(index) => {
                // Check the index before prompting for replacement values.
                manager.get(index)?;
                ui.show_add_format()?;
                let line = input.read_line("")?.ok_or(SyncError::InputClosed)?;
                let updated = Event::parse_details(&line, &config.date_format)?;
                *manager.get_mut(index)? = updated;
                ui.show_edited(manager.get(index)?)?;
            }
            Command::List => {
                ui.print_events(manager.events())?;
            }
            Command::Find(keyword) => {
                debug!("Searching descriptions for '{}'", keyword);
                let matches = manager.find(&keyword);
                ui.print_matching_events(&matches)?;
            }
            Command::Bye => {
                ui.show_goodbye()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}
