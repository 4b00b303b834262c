//! fx-pairs - Cointegration Pairs Trading Study Configuration
//!
//! Front end for the study parameter files: show resolved values, validate
//! edits, and scaffold new configs from the built-in defaults.

mod adapters;
mod config;
mod domain;
mod strategy;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::cli::{CliApp, Command, InitCmd, ShowCmd, ValidateCmd};
use crate::config::{load_config, load_defaults, Config};
use crate::strategy::StrategyConfig;

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Show(cmd) => show_command(cmd),
        Command::Validate(cmd) => validate_command(cmd),
        Command::Init(cmd) => init_command(cmd),
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}

/// Expand ~ in user-supplied paths
fn expand_path(path: &Path) -> String {
    shellexpand::tilde(&path.to_string_lossy().into_owned()).to_string()
}

fn show_command(cmd: ShowCmd) -> Result<()> {
    let params = match cmd.config {
        Some(path) => {
            let path = expand_path(&path);
            load_config(&path).with_context(|| format!("Failed to load configuration '{path}'"))?
        }
        None => load_defaults().context("Built-in defaults failed validation")?,
    };

    print_params(&params);
    Ok(())
}

fn validate_command(cmd: ValidateCmd) -> Result<()> {
    let path = expand_path(&cmd.config);
    let params =
        load_config(&path).with_context(|| format!("Configuration '{path}' is invalid"))?;

    tracing::info!(pairs = params.currency_pairs.len(), "configuration accepted");
    println!("OK: {path}");
    Ok(())
}

fn init_command(cmd: InitCmd) -> Result<()> {
    let path = expand_path(&cmd.path);

    if Path::new(&path).exists() && !cmd.force {
        bail!(
            "Refusing to overwrite existing file '{}'\n\n\
             Pass --force to replace it with the built-in study defaults.",
            path
        );
    }

    let defaults = load_defaults().context("Built-in defaults failed validation")?;
    let file_model = Config::from(&defaults);
    let rendered =
        toml::to_string_pretty(&file_model).context("Failed to render default configuration")?;

    if let Some(parent) = Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
    }
    std::fs::write(&path, rendered)
        .with_context(|| format!("Failed to write configuration to '{path}'"))?;

    tracing::info!(path = %path, "wrote default configuration");
    println!("Wrote study defaults to {path}");
    Ok(())
}

fn print_params(params: &StrategyConfig) {
    println!("Currency pairs:");
    for pair in &params.currency_pairs {
        println!("  {} ({}/{})", pair.symbol(), pair.base(), pair.quote());
    }
    println!("Training windows (days): {:?}", params.training_windows);
    println!("Testing windows (days):  {:?}", params.testing_windows);
    println!("Z-score thresholds:      {:?}", params.z_score_thresholds);
    println!(
        "Study period:            {} to {} ({} days)",
        params.start_date,
        params.end_date,
        params.study_period_days()
    );
    println!("Significance level:      {}", params.significance_level);
    println!("Risk-free rate:          {}", params.risk_free_rate);
    println!("Max ADF lag:             {}", params.max_lag);
}
