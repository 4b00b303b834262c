//! Configuration Integration Tests
//!
//! Drives the full path a consumer takes: TOML file -> loader -> validated
//! StrategyConfig, including the scaffold-then-reload cycle the `init`
//! command relies on. No network, no fixtures outside the repo.

use std::io::Write;
use tempfile::NamedTempFile;

use fx_pairs::config::{load_config, load_defaults, Config, ConfigError};
use fx_pairs::strategy::{ConfigError as ValidationError, StrategyConfig};

// ============================================================================
// Fixtures
// ============================================================================

/// Write TOML content to a temp file and return its handle
fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ============================================================================
// Study defaults
// ============================================================================

#[test]
fn test_defaults_match_published_study() {
    let params = load_defaults().unwrap();

    let symbols: Vec<String> = params
        .currency_pairs
        .iter()
        .map(|p| p.symbol())
        .collect();
    assert_eq!(
        symbols,
        vec![
            "EURUSD=X", "GBPUSD=X", "USDJPY=X", "USDCHF=X", "USDCAD=X", "AUDUSD=X", "NZDUSD=X"
        ]
    );
    assert_eq!(params.training_windows, vec![63, 128, 257]);
    assert_eq!(params.testing_windows, vec![1, 5, 21, 63, 128]);
    assert_eq!(params.z_score_thresholds, vec![1.0, 2.0, 3.0]);
    assert_eq!(params.start_date.to_string(), "2007-01-01");
    assert_eq!(params.end_date.to_string(), "2024-01-01");
    assert_eq!(params.significance_level, 0.05);
    assert_eq!(params.risk_free_rate, 0.0);
    assert_eq!(params.max_lag, 12);
}

#[test]
fn test_shipped_config_file_equals_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
    let params = load_config(path).unwrap();
    assert_eq!(params, StrategyConfig::default());
}

// ============================================================================
// Scaffold -> reload cycle
// ============================================================================

#[test]
fn test_rendered_defaults_reload_identically() {
    let defaults = load_defaults().unwrap();
    let rendered = toml::to_string_pretty(&Config::from(&defaults)).unwrap();

    let file = write_config(&rendered);
    let reloaded = load_config(file.path()).unwrap();

    assert_eq!(reloaded, defaults);
}

// ============================================================================
// File overrides
// ============================================================================

#[test]
fn test_subset_override() {
    let file = write_config(
        r#"
[universe]
currency_pairs = ["EURUSD=X", "USDJPY=X"]

[signals]
z_score_thresholds = [2.0]
"#,
    );

    let params = load_config(file.path()).unwrap();
    let defaults = StrategyConfig::default();

    assert_eq!(params.currency_pairs.len(), 2);
    assert_eq!(params.z_score_thresholds, vec![2.0]);
    // Untouched sections keep the study values
    assert_eq!(params.training_windows, defaults.training_windows);
    assert_eq!(params.testing_windows, defaults.testing_windows);
    assert_eq!(params.start_date, defaults.start_date);
    assert_eq!(params.max_lag, defaults.max_lag);
}

// ============================================================================
// Rejection paths
// ============================================================================

#[test]
fn test_empty_universe_rejected() {
    let file = write_config("[universe]\ncurrency_pairs = []\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(ValidationError::EmptyCurrencyPairs)
    ));
}

#[test]
fn test_zero_window_rejected() {
    let file = write_config("[windows]\ntraining_days = [63, 0, 257]\ntesting_days = [5]\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(ValidationError::InvalidTrainingWindow(0))
    ));
}

#[test]
fn test_inverted_study_period_rejected() {
    let file = write_config(
        "[study]\nstart_date = \"2024-01-01\"\nend_date = \"2007-01-01\"\n",
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(ValidationError::InvalidStudyPeriod { .. })
    ));
}

#[test]
fn test_out_of_range_significance_rejected() {
    let file = write_config("[statistics]\nsignificance_level = 1.5\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(ValidationError::InvalidSignificanceLevel(_))
    ));
}

#[test]
fn test_zero_max_lag_rejected() {
    let file = write_config("[statistics]\nmax_lag = 0\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationError(ValidationError::InvalidMaxLag(0))
    ));
}

#[test]
fn test_malformed_date_rejected() {
    let file = write_config("[study]\nstart_date = \"first of January\"\n");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_error_names_offending_field() {
    let file = write_config("[performance]\nrisk_free_rate = -0.5\n");

    let err = load_config(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("risk_free_rate"));
    assert!(message.contains("-0.5"));
}
