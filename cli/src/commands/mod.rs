//! CLI Commands
//!
//! Implementation of all fee-calc commands.

pub mod calculate;
pub mod estimate;
pub mod schedule;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use fee_calculator_core_rs::{CalculationRequest, EstimateSettings};
use tracing::debug;

/// Consumption tax rate applied when none is given
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Parse a `--tax-rate` value: a fraction between 0 and 1
pub fn parse_tax_rate(text: &str) -> Result<f64, String> {
    let rate: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("tax rate must be between 0 and 1, got {}", text))
    }
}

/// Read a file, or stdin for `-`
fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read request from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

/// Load and parse a calculation request
pub fn load_request(path: &str) -> Result<CalculationRequest> {
    let text = read_source(path)?;
    let request: CalculationRequest = serde_json::from_str(&text)
        .with_context(|| format!("Invalid calculation request in {}", path))?;
    debug!(category = request.category().as_str(), "request loaded");
    Ok(request)
}

/// Load estimate settings, or the placeholder defaults without a file
pub fn load_settings(path: Option<&str>) -> Result<EstimateSettings> {
    match path {
        Some(path) => {
            let text = read_source(path)?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid estimate settings in {}", path))
        }
        None => Ok(EstimateSettings::default()),
    }
}
