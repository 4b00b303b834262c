//! fx-pairs - Cointegration Pairs Trading Study Configuration Library
//!
//! Owns the parameter surface of a cointegration-based forex pairs trading
//! study and exposes it as a single validated, immutable value object.
//! Downstream analysis stages (price retrieval, cointegration testing,
//! performance evaluation) live outside this crate and only borrow the
//! resolved [`strategy::StrategyConfig`].
//!
//! # Modules
//!
//! - `domain`: Typed values (CurrencyPair)
//! - `strategy`: The StrategyConfig parameter set and its validation
//! - `config`: TOML loading with per-key defaults
//! - `adapters`: CLI front end

pub mod adapters;
pub mod config;
pub mod domain;
pub mod strategy;
