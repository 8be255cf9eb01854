//! Interactive read-eval-print loop
//!
//! Reads one line per iteration, parses it into a command, executes it,
//! and keeps going until `bye` or end of input. Errors abort only the
//! current command.

use crate::config::Config;
use crate::core::{EventManager, Flow, LineSource, Parser};
use crate::error::{Result, SyncError};
use crate::ui::Ui;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::io::{self, Write};
use tracing::debug;

/// Line source backed by a rustyline editor
struct EditorInput {
    editor: Editor<(), DefaultHistory>,
}

impl EditorInput {
    fn new() -> Result<Self> {
        let editor =
            Editor::<(), DefaultHistory>::new().map_err(|e| SyncError::input(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(&line)
                        .map_err(|e| SyncError::input(e.to_string()))?;
                }
                Ok(Some(line))
            }
            // Ctrl-C cancels the current line; the session goes on.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(SyncError::input(err.to_string())),
        }
    }
}

/// Run the interactive session on the real terminal
pub fn run(config: &Config) -> Result<()> {
    let mut input = EditorInput::new()?;
    let mut ui = Ui::new(io::stdout(), &config.date_format);
    let mut manager = EventManager::new();
    run_session(config, &mut manager, &mut ui, &mut input)
}

/// Drive one session over the given line source and output sink
///
/// Separated from [`run`] so sessions can be scripted deterministically.
pub fn run_session<W: Write>(
    config: &Config,
    manager: &mut EventManager,
    ui: &mut Ui<W>,
    input: &mut dyn LineSource,
) -> Result<()> {
    let parser = Parser::new(config);
    ui.show_welcome()?;

    loop {
        let Some(line) = input.read_line(&config.prompt)? else {
            debug!("Input stream ended");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = parser.parse(line, manager, ui, input);
        match result.and_then(|command| command.execute(config, manager, ui, input)) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(SyncError::InputClosed) => {
                debug!("Input stream ended mid-command");
                break;
            }
            Err(error) => {
                debug!("Command failed: {}", error);
                ui.show_error(&error)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueuedInput;

    fn run_script(lines: &[&str]) -> String {
        let config = Config::default();
        let mut manager = EventManager::new();
        let mut buffer = Vec::new();
        let mut ui = Ui::new(&mut buffer, &config.date_format);
        let mut input = QueuedInput::new(lines.iter().copied());
        run_session(&config, &mut manager, &mut ui, &mut input).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_session_continues_after_errors() {
        let output = run_script(&["nonsense", "list", "bye"]);
        assert!(output.contains("Invalid command: 'nonsense'"));
        assert!(output.contains("No events in the list."));
        assert!(output.contains("Bye"));
    }

    #[test]
    fn test_add_then_list_round_trip() {
        let output = run_script(&[
            "add",
            "Team Sync | 2025/08/01 10:00 | 2025/08/01 11:00 | Room 4 | weekly planning",
            "list",
            "delete",
            "1",
            "list",
            "bye",
        ]);
        assert!(output.contains("Added event: Team Sync"));
        assert!(output.contains("Deleted event: Team Sync"));
        assert!(output.contains("No events in the list."));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = run_script(&["", "   ", "bye"]);
        assert!(output.contains("Bye"));
        assert!(!output.contains("Invalid command"));
    }

    #[test]
    fn test_eof_without_bye_ends_cleanly() {
        let output = run_script(&["list"]);
        assert!(output.contains("No events in the list."));
    }

    #[test]
    fn test_eof_mid_command_ends_cleanly() {
        // "add" consumes the last line, leaving its follow-up read at EOF.
        let output = run_script(&["add"]);
        assert!(output.contains("Enter event details"));
    }

    #[test]
    fn test_find_session() {
        let output = run_script(&[
            "add",
            "Standup | 2025/08/01 09:00 | 2025/08/01 09:15 | Online | daily team check-in",
            "add",
            "Lunch | 2025/08/01 12:00 | 2025/08/01 13:00 | Cafe | pizza",
            "find TEAM",
            "bye",
        ]);
        assert!(output.contains("Matching events:"));
        assert!(output.contains("Standup"));
    }
}
