//! Command-line parsing
//!
//! Turns one keyword line (plus any follow-up input the keyword needs)
//! into exactly one [`Command`], or fails with a descriptive error. The
//! parser is stateless; a malformed follow-up line fails the whole
//! command immediately and the user re-issues it.

use crate::config::Config;
use crate::core::command::Command;
use crate::core::event::Event;
use crate::core::input::LineSource;
use crate::core::manager::EventManager;
use crate::error::{Result, SyncError};
use crate::ui::Ui;
use std::io::Write;
use tracing::{debug, instrument};

/// Parser for interactive commands
#[derive(Debug)]
pub struct Parser {
    date_format: String,
}

impl Parser {
    /// Create a parser using the configured timestamp format
    pub fn new(config: &Config) -> Self {
        Self {
            date_format: config.date_format.clone(),
        }
    }

    /// Parse one input line into a command
    ///
    /// The keyword is matched case-insensitively. `find` carries its
    /// keyword on the same line; the other commands gather parameters
    /// through follow-up reads on `input`.
    #[instrument(skip(self, manager, ui, input))]
    pub fn parse<W: Write>(
        &self,
        line: &str,
        manager: &EventManager,
        ui: &mut Ui<W>,
        input: &mut dyn LineSource,
    ) -> Result<Command> {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        debug!("Parsing command: {}", trimmed);

        match lower.as_str() {
            "bye" => Ok(Command::Bye),
            "list" => Ok(Command::List),
            "add" => self.build_add(ui, input),
            "delete" => Self::build_delete(manager, input),
            "duplicate" => Self::build_duplicate(manager, input),
            "edit" => Self::build_edit(manager, input),
            _ if lower == "find" || lower.starts_with("find ") => Self::build_find(trimmed),
            _ => Err(SyncError::invalid_command(trimmed)),
        }
    }

    fn build_add<W: Write>(
        &self,
        ui: &mut Ui<W>,
        input: &mut dyn LineSource,
    ) -> Result<Command> {
        ui.show_add_format()?;
        let line = input.read_line("")?.ok_or(SyncError::InputClosed)?;
        let event = Event::parse_details(&line, &self.date_format)?;
        Ok(Command::Add(event))
    }

    fn build_delete(manager: &EventManager, input: &mut dyn LineSource) -> Result<Command> {
        let index = Self::read_index(input, "Enter event index to delete: ", manager.len())?;
        Ok(Command::Delete(index))
    }

    fn build_duplicate(manager: &EventManager, input: &mut dyn LineSource) -> Result<Command> {
        let line = input
            .read_line("Enter duplicate command (format: <index> <new event name>): ")?
            .ok_or(SyncError::InputClosed)?;

        let (index_part, new_name) = line
            .trim()
            .split_once(' ')
            .ok_or(SyncError::InvalidDuplicateFormat)?;

        let index = Self::parse_position(index_part, manager.len())?;
        let source = manager.get(index)?.clone();
        Ok(Command::Duplicate {
            source,
            new_name: new_name.to_string(),
        })
    }

    fn build_edit(manager: &EventManager, input: &mut dyn LineSource) -> Result<Command> {
        let index = Self::read_index(input, "Enter event index to edit: ", manager.len())
            .map_err(|e| match e {
                // End of stream still shuts the session down cleanly.
                SyncError::InputClosed => SyncError::InputClosed,
                other => SyncError::edit_event(other.to_string()),
            })?;
        Ok(Command::Edit(index))
    }

    fn build_find(line: &str) -> Result<Command> {
        let keyword = line["find".len()..].trim().to_lowercase();
        if keyword.is_empty() {
            return Err(SyncError::EmptyKeyword);
        }
        Ok(Command::Find(keyword))
    }

    /// Read one line and parse it as a 1-based index
    fn read_index(input: &mut dyn LineSource, prompt: &str, len: usize) -> Result<usize> {
        let line = input.read_line(prompt)?.ok_or(SyncError::InputClosed)?;
        Self::parse_position(&line, len)
    }

    /// Convert a user-entered 1-based position into a 0-based index
    ///
    /// Positions below 1 cannot address anything, so they are rejected
    /// here; the upper bound is checked by the manager when the command
    /// actually touches the list.
    fn parse_position(token: &str, len: usize) -> Result<usize> {
        let position: i64 = token
            .trim()
            .parse()
            .map_err(|source| SyncError::InvalidIndexFormat { source })?;
        if position < 1 {
            return Err(SyncError::invalid_index(position, len));
        }
        Ok((position - 1) as usize)
    }
}
