//! Configuration Loader
//!
//! Loads and validates study parameters from TOML files matching the
//! config/default.toml structure. Every key carries a compiled-in default
//! (the published study values), so a file only needs to list the keys it
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::pair::CurrencyPair;
use crate::strategy::params::{self, StrategyConfig};

/// Main configuration structure matching the TOML file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub universe: UniverseSection,
    #[serde(default)]
    pub windows: WindowsSection,
    #[serde(default)]
    pub signals: SignalsSection,
    #[serde(default)]
    pub study: StudySection,
    #[serde(default)]
    pub statistics: StatisticsSection,
    #[serde(default)]
    pub performance: PerformanceSection,
}

/// Instrument universe section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniverseSection {
    /// Forex tickers in Yahoo Finance format (e.g. "EURUSD=X")
    #[serde(default = "default_currency_pairs")]
    pub currency_pairs: Vec<CurrencyPair>,
}

/// Rolling window section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowsSection {
    /// Estimation window lengths in trading days
    #[serde(default = "default_training_days")]
    pub training_days: Vec<u32>,
    /// Out-of-sample evaluation window lengths in trading days
    #[serde(default = "default_testing_days")]
    pub testing_days: Vec<u32>,
}

/// Signal generation section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalsSection {
    /// Entry trigger distances in standard deviations
    #[serde(default = "default_z_score_thresholds")]
    pub z_score_thresholds: Vec<f64>,
}

/// Study period section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudySection {
    /// First day of the study period, "YYYY-MM-DD"
    #[serde(default = "default_start_date")]
    pub start_date: chrono::NaiveDate,
    /// Last day of the study period, "YYYY-MM-DD"
    #[serde(default = "default_end_date")]
    pub end_date: chrono::NaiveDate,
}

/// Statistical testing section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatisticsSection {
    /// Cutoff for rejecting the no-cointegration null hypothesis
    #[serde(default = "default_significance_level")]
    pub significance_level: f64,
    /// Maximum lag order searched by the ADF tests
    #[serde(default = "default_max_lag")]
    pub max_lag: u32,
}

/// Performance evaluation section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerformanceSection {
    /// Annualized risk-free rate for Sharpe ratios
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

// Per-key defaults are the study values carried by StrategyConfig::default(),
// sliced up so a file may override any subset of keys.

fn study_defaults() -> StrategyConfig {
    StrategyConfig::default()
}

fn default_currency_pairs() -> Vec<CurrencyPair> {
    study_defaults().currency_pairs
}

fn default_training_days() -> Vec<u32> {
    study_defaults().training_windows
}

fn default_testing_days() -> Vec<u32> {
    study_defaults().testing_windows
}

fn default_z_score_thresholds() -> Vec<f64> {
    study_defaults().z_score_thresholds
}

fn default_start_date() -> chrono::NaiveDate {
    study_defaults().start_date
}

fn default_end_date() -> chrono::NaiveDate {
    study_defaults().end_date
}

fn default_significance_level() -> f64 {
    study_defaults().significance_level
}

fn default_max_lag() -> u32 {
    study_defaults().max_lag
}

fn default_risk_free_rate() -> f64 {
    study_defaults().risk_free_rate
}

impl Default for UniverseSection {
    fn default() -> Self {
        Self {
            currency_pairs: default_currency_pairs(),
        }
    }
}

impl Default for WindowsSection {
    fn default() -> Self {
        Self {
            training_days: default_training_days(),
            testing_days: default_testing_days(),
        }
    }
}

impl Default for SignalsSection {
    fn default() -> Self {
        Self {
            z_score_thresholds: default_z_score_thresholds(),
        }
    }
}

impl Default for StudySection {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
        }
    }
}

impl Default for StatisticsSection {
    fn default() -> Self {
        Self {
            significance_level: default_significance_level(),
            max_lag: default_max_lag(),
        }
    }
}

impl Default for PerformanceSection {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(#[from] params::ConfigError),
}

/// Load study parameters from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StrategyConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let config: Config = toml::from_str(&content)?;
    let params = StrategyConfig::from(&config);
    params.validate()?;
    tracing::debug!(
        path = %path.as_ref().display(),
        pairs = params.currency_pairs.len(),
        "loaded study configuration"
    );
    Ok(params)
}

/// Load the compiled-in study parameters (no file involved)
pub fn load_defaults() -> Result<StrategyConfig, ConfigError> {
    let params = StrategyConfig::default();
    params.validate()?;
    Ok(params)
}

// Restructuring only; all parse-fallible values (dates, pair symbols) are
// already typed by the time a Config exists.
impl From<&Config> for StrategyConfig {
    fn from(config: &Config) -> Self {
        StrategyConfig {
            currency_pairs: config.universe.currency_pairs.clone(),
            training_windows: config.windows.training_days.clone(),
            testing_windows: config.windows.testing_days.clone(),
            z_score_thresholds: config.signals.z_score_thresholds.clone(),
            start_date: config.study.start_date,
            end_date: config.study.end_date,
            significance_level: config.statistics.significance_level,
            risk_free_rate: config.performance.risk_free_rate,
            max_lag: config.statistics.max_lag,
        }
    }
}

impl From<&StrategyConfig> for Config {
    fn from(params: &StrategyConfig) -> Self {
        Config {
            universe: UniverseSection {
                currency_pairs: params.currency_pairs.clone(),
            },
            windows: WindowsSection {
                training_days: params.training_windows.clone(),
                testing_days: params.testing_windows.clone(),
            },
            signals: SignalsSection {
                z_score_thresholds: params.z_score_thresholds.clone(),
            },
            study: StudySection {
                start_date: params.start_date,
                end_date: params.end_date,
            },
            statistics: StatisticsSection {
                significance_level: params.significance_level,
                max_lag: params.max_lag,
            },
            performance: PerformanceSection {
                risk_free_rate: params.risk_free_rate,
            },
        }
    }
}
