//! Adapters Layer - External Surfaces
//!
//! - CLI: command-line interface for inspecting and validating configs

pub mod cli;
