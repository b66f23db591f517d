//! Command-line layer: argument parsing, interactive prompts and the
//! per-subcommand handlers.

pub mod commands;
pub mod parser;
pub mod prompt;
