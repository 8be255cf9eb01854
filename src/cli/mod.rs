//! Command-line interface module
//!
//! Provides argument parsing and the interactive session loop.

pub mod args;
pub mod repl;

pub use args::{Args, parse_args};
pub use repl::{run, run_session};
