//! Strategy Parameters
//!
//! The validated parameter set for the cointegration pairs trading study.
//! Default values are the ones published in "Cointegration-Based Strategies
//! in Forex Pair Trading" (17-year study period, G7 dollar pairs).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::pair::CurrencyPair;

/// Complete strategy configuration
///
/// Built once at startup, validated, and then only ever read. Downstream
/// stages (data retrieval, cointegration tests, performance evaluation)
/// borrow it; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Universe of forex instruments under study
    pub currency_pairs: Vec<CurrencyPair>,
    /// Rolling estimation window lengths in trading days
    pub training_windows: Vec<u32>,
    /// Out-of-sample evaluation window lengths in trading days
    pub testing_windows: Vec<u32>,
    /// Entry trigger distances in standard deviations
    pub z_score_thresholds: Vec<f64>,
    /// First day of the study period (inclusive)
    pub start_date: NaiveDate,
    /// Last day of the study period (exclusive)
    pub end_date: NaiveDate,
    /// Cutoff for rejecting the no-cointegration null hypothesis
    pub significance_level: f64,
    /// Annualized risk-free rate used for Sharpe ratios
    pub risk_free_rate: f64,
    /// Maximum lag order searched by the ADF stationarity tests
    pub max_lag: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            currency_pairs: default_pairs(),
            training_windows: vec![63, 128, 257],
            testing_windows: vec![1, 5, 21, 63, 128],
            z_score_thresholds: vec![1.0, 2.0, 3.0],
            start_date: ymd(2007, 1, 1),
            end_date: ymd(2024, 1, 1),
            significance_level: 0.05,
            risk_free_rate: 0.0,
            max_lag: 12,
        }
    }
}

/// The seven dollar pairs from the study, Yahoo Finance format
fn default_pairs() -> Vec<CurrencyPair> {
    [
        "EURUSD=X", "GBPUSD=X", "USDJPY=X", "USDCHF=X", "USDCAD=X", "AUDUSD=X", "NZDUSD=X",
    ]
    .iter()
    .map(|s| s.parse().expect("literal pair symbol"))
    .collect()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal calendar date")
}

impl StrategyConfig {
    /// Create a new config with a custom significance level
    pub fn with_significance_level(mut self, level: f64) -> Self {
        self.significance_level = level;
        self
    }

    /// Create a new config with a custom ADF lag bound
    pub fn with_max_lag(mut self, max_lag: u32) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Create a new config with a custom study period
    pub fn with_study_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Length of the study period in calendar days
    pub fn study_period_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Validate every parameter, reporting the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_pairs.is_empty() {
            return Err(ConfigError::EmptyCurrencyPairs);
        }

        if self.training_windows.is_empty() {
            return Err(ConfigError::EmptyTrainingWindows);
        }
        if let Some(&days) = self.training_windows.iter().find(|&&d| d == 0) {
            return Err(ConfigError::InvalidTrainingWindow(days));
        }

        if self.testing_windows.is_empty() {
            return Err(ConfigError::EmptyTestingWindows);
        }
        if let Some(&days) = self.testing_windows.iter().find(|&&d| d == 0) {
            return Err(ConfigError::InvalidTestingWindow(days));
        }

        if self.z_score_thresholds.is_empty() {
            return Err(ConfigError::EmptyZScoreThresholds);
        }
        if let Some(&z) = self
            .z_score_thresholds
            .iter()
            .find(|&&z| !z.is_finite() || z <= 0.0)
        {
            return Err(ConfigError::InvalidZScoreThreshold(z));
        }

        if self.start_date >= self.end_date {
            return Err(ConfigError::InvalidStudyPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if !self.significance_level.is_finite()
            || self.significance_level <= 0.0
            || self.significance_level >= 1.0
        {
            return Err(ConfigError::InvalidSignificanceLevel(
                self.significance_level,
            ));
        }

        if !self.risk_free_rate.is_finite() || self.risk_free_rate < 0.0 {
            return Err(ConfigError::InvalidRiskFreeRate(self.risk_free_rate));
        }

        if self.max_lag < 1 {
            return Err(ConfigError::InvalidMaxLag(self.max_lag));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("currency_pairs must not be empty")]
    EmptyCurrencyPairs,
    #[error("training_windows must not be empty")]
    EmptyTrainingWindows,
    #[error("invalid training window: {0} days (must be >= 1)")]
    InvalidTrainingWindow(u32),
    #[error("testing_windows must not be empty")]
    EmptyTestingWindows,
    #[error("invalid testing window: {0} days (must be >= 1)")]
    InvalidTestingWindow(u32),
    #[error("z_score_thresholds must not be empty")]
    EmptyZScoreThresholds,
    #[error("invalid z-score threshold: {0} (must be a finite value > 0)")]
    InvalidZScoreThreshold(f64),
    #[error("invalid study period: start {start} is not before end {end}")]
    InvalidStudyPeriod { start: NaiveDate, end: NaiveDate },
    #[error("invalid significance_level: {0} (must be strictly between 0 and 1)")]
    InvalidSignificanceLevel(f64),
    #[error("invalid risk_free_rate: {0} (must be >= 0)")]
    InvalidRiskFreeRate(f64),
    #[error("invalid max_lag: {0} (must be >= 1)")]
    InvalidMaxLag(u32),
}
