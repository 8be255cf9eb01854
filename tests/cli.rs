//! End-to-end tests driving the binary with scripted stdin

use assert_cmd::Command;
use predicates::prelude::*;

fn eventsync() -> Command {
    Command::cargo_bin("eventsync").unwrap()
}

#[test]
fn test_list_empty_then_exit() {
    eventsync()
        .write_stdin("list\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events in the list."))
        .stdout(predicate::str::contains("Bye"));
}

#[test]
fn test_add_then_list_shows_event() {
    eventsync()
        .write_stdin(
            "add\nTeam Sync | 2025/08/01 10:00 | 2025/08/01 11:00 | Room 4 | weekly planning\nlist\nbye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Added event: Team Sync"))
        .stdout(predicate::str::contains("Room 4"));
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    eventsync()
        .write_stdin("frobnicate\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command: 'frobnicate'"))
        .stdout(predicate::str::contains("Bye"));
}

#[test]
fn test_delete_round_trip() {
    eventsync()
        .write_stdin(
            "add\nStandup | 2025/08/01 09:00 | 2025/08/01 09:15 | Online | daily check-in\ndelete\n1\nlist\nbye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted event: Standup"))
        .stdout(predicate::str::contains("No events in the list."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    eventsync().write_stdin("list\n").assert().success();
}

#[test]
fn test_custom_date_format() {
    eventsync()
        .args(["--date-format", "%Y-%m-%d %H:%M"])
        .write_stdin("add\nRetro | 2025-08-01 15:00 | 2025-08-01 16:00 | Hall | sprint retro\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added event: Retro"))
        .stdout(predicate::str::contains("2025-08-01 15:00"));
}
