//! CLI Adapter
//!
//! Command-line interface for the study configuration.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, InitCmd, ShowCmd, ValidateCmd};
