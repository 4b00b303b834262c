//! Strategy Layer - Study Parameters
//!
//! Holds the immutable parameter set consumed by the downstream analysis
//! stages: currency pair universe, rolling training/testing windows, z-score
//! entry thresholds, study period, significance level, risk-free rate, and
//! the ADF lag bound.

pub mod params;

pub use params::{ConfigError, StrategyConfig};
