//! CLI Command Definitions
//!
//! Argument structures for the fx-pairs configuration tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fx-pairs - Cointegration Pairs Trading Study Configuration
#[derive(Parser, Debug)]
#[command(
    name = "fx-pairs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Configuration tool for the forex cointegration pairs trading study",
    long_about = "Inspects, validates, and scaffolds the parameter files consumed by the \
                  cointegration study pipeline (data retrieval, statistical testing, and \
                  performance evaluation)."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved study parameters
    Show(ShowCmd),

    /// Validate a configuration file
    Validate(ValidateCmd),

    /// Write the built-in study parameters to a config file
    Init(InitCmd),
}

/// Print resolved parameters
#[derive(Parser, Debug)]
pub struct ShowCmd {
    /// Path to configuration file (omit to show the built-in defaults)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Validate a configuration file
#[derive(Parser, Debug)]
pub struct ValidateCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,
}

/// Scaffold a config file from the built-in defaults
#[derive(Parser, Debug)]
pub struct InitCmd {
    /// Destination path for the new config file
    #[arg(value_name = "FILE", default_value = "config/default.toml")]
    pub path: PathBuf,

    /// Overwrite the destination if it already exists
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliApp::command().debug_assert();
    }

    #[test]
    fn test_parse_show_defaults() {
        let app = CliApp::parse_from(["fx-pairs", "show"]);
        match app.command {
            Command::Show(cmd) => assert!(cmd.config.is_none()),
            _ => panic!("expected show command"),
        }
        assert!(!app.verbose);
    }

    #[test]
    fn test_parse_validate_with_path() {
        let app = CliApp::parse_from(["fx-pairs", "-v", "validate", "-c", "study.toml"]);
        assert!(app.verbose);
        match app.command {
            Command::Validate(cmd) => {
                assert_eq!(cmd.config, PathBuf::from("study.toml"));
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_parse_init_force() {
        let app = CliApp::parse_from(["fx-pairs", "init", "out.toml", "--force"]);
        match app.command {
            Command::Init(cmd) => {
                assert_eq!(cmd.path, PathBuf::from("out.toml"));
                assert!(cmd.force);
            }
            _ => panic!("expected init command"),
        }
    }
}
