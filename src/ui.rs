//! Console presentation layer
//!
//! All user-visible output goes through [`Ui`], which writes to an
//! injected sink so sessions can be captured in tests. Event listings
//! render as tables with 1-based indices.

use crate::core::event::Event;
use crate::error::{Result, SyncError};
use cli_table::WithTitle;
use std::io::Write;

/// One row of an event listing
#[derive(cli_table::Table)]
struct EventRow {
    #[table(title = "#")]
    index: usize,
    #[table(title = "Name")]
    name: String,
    #[table(title = "Start")]
    start: String,
    #[table(title = "End")]
    end: String,
    #[table(title = "Location")]
    location: String,
    #[table(title = "Description")]
    description: String,
}

/// Presentation layer over an output sink
#[derive(Debug)]
pub struct Ui<W: Write> {
    out: W,
    date_format: String,
}

impl<W: Write> Ui<W> {
    /// Create a new UI writing to `out`, formatting timestamps with
    /// `date_format`
    pub fn new(out: W, date_format: impl Into<String>) -> Self {
        Self {
            out,
            date_format: date_format.into(),
        }
    }

    /// Print the startup banner
    pub fn show_welcome(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to eventsync.")?;
        writeln!(
            self.out,
            "Commands: add, delete, duplicate, edit, find <keyword>, list, bye."
        )?;
        Ok(())
    }

    /// Print the shutdown message
    pub fn show_goodbye(&mut self) -> Result<()> {
        writeln!(self.out, "Bye. See you next time.")?;
        Ok(())
    }

    /// Print the expected event details format
    pub fn show_add_format(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Enter event details (name | yyyy/MM/dd HH:mm | yyyy/MM/dd HH:mm | location | description):"
        )?;
        Ok(())
    }

    /// Confirm an appended event
    pub fn show_added(&mut self, event: &Event) -> Result<()> {
        writeln!(self.out, "Added event: {}", event.name)?;
        Ok(())
    }

    /// Confirm a removed event
    pub fn show_deleted(&mut self, event: &Event) -> Result<()> {
        writeln!(self.out, "Deleted event: {}", event.name)?;
        Ok(())
    }

    /// Confirm a duplicated event
    pub fn show_duplicated(&mut self, source_name: &str, copy: &Event) -> Result<()> {
        writeln!(self.out, "Duplicated '{}' as '{}'.", source_name, copy.name)?;
        Ok(())
    }

    /// Confirm an overwritten event
    pub fn show_edited(&mut self, event: &Event) -> Result<()> {
        writeln!(self.out, "Updated event: {}", event.name)?;
        Ok(())
    }

    /// Print the full event list
    pub fn print_events(&mut self, events: &[Event]) -> Result<()> {
        if events.is_empty() {
            writeln!(self.out, "No events in the list.")?;
            return Ok(());
        }
        self.print_table(events.iter())
    }

    /// Print the events matching a find keyword
    pub fn print_matching_events(&mut self, events: &[&Event]) -> Result<()> {
        if events.is_empty() {
            writeln!(self.out, "No matching events found.")?;
            return Ok(());
        }
        writeln!(self.out, "Matching events:")?;
        self.print_table(events.iter().copied())
    }

    /// Print an error message
    pub fn show_error(&mut self, error: &SyncError) -> Result<()> {
        writeln!(self.out, "{error}")?;
        Ok(())
    }

    fn print_table<'a, I>(&mut self, events: I) -> Result<()>
    where
        I: Iterator<Item = &'a Event>,
    {
        let rows: Vec<EventRow> = events
            .enumerate()
            .map(|(i, event)| EventRow {
                index: i + 1,
                name: event.name.clone(),
                start: event.start.format(&self.date_format).to_string(),
                end: event.end.format(&self.date_format).to_string(),
                location: event.location.clone(),
                description: event.description.clone(),
            })
            .collect();

        let table = rows.with_title();
        let rendered = table.display()?;
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FORMAT: &str = "%Y/%m/%d %H:%M";

    fn sample(name: &str) -> Event {
        let start = NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        Event::new(name, start, end, "Room 4", "planning")
    }

    fn render(f: impl FnOnce(&mut Ui<&mut Vec<u8>>)) -> String {
        let mut buffer = Vec::new();
        let mut ui = Ui::new(&mut buffer, FORMAT);
        f(&mut ui);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_print_events_empty_list() {
        let output = render(|ui| ui.print_events(&[]).unwrap());
        assert!(output.contains("No events in the list."));
    }

    #[test]
    fn test_print_events_shows_one_based_indices() {
        let events = vec![sample("first"), sample("second")];
        let output = render(|ui| ui.print_events(&events).unwrap());

        assert!(output.contains("first"));
        assert!(output.contains("second"));
        assert!(output.contains("2025/08/01 10:00"));
        let first_pos = output.find("first").unwrap();
        let second_pos = output.find("second").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_print_matching_events() {
        let event = sample("match");
        let output = render(|ui| ui.print_matching_events(&[&event]).unwrap());
        assert!(output.contains("Matching events:"));
        assert!(output.contains("match"));

        let output = render(|ui| ui.print_matching_events(&[]).unwrap());
        assert!(output.contains("No matching events found."));
    }
}
