//! Configuration Module
//!
//! Loads and validates study parameters from TOML files.

pub mod loader;

pub use loader::{load_config, load_defaults, Config, ConfigError};
