//! Estimate command

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use fee_calculator_core_rs::estimate::estimate_file_name;
use fee_calculator_core_rs::{calculate, EstimateDocument, FeeSchedule};
use tracing::info;

use super::{load_request, load_settings};

/// Run the estimate command
pub fn run(
    request_path: &str,
    settings_path: Option<&str>,
    tax_rate: f64,
    output: Option<String>,
) -> Result<()> {
    let request = load_request(request_path)?;
    let settings = load_settings(settings_path)?;

    let schedule = FeeSchedule::standard();
    let result = calculate(schedule, &request);

    let now = Local::now();
    let document = EstimateDocument::build(&result, tax_rate, settings, schedule, now.date_naive());

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(estimate_file_name(now.naive_local())));
    fs::write(&path, document.render_text())
        .with_context(|| format!("Failed to write estimate to {}", path.display()))?;

    info!(path = %path.display(), "estimate written");
    println!(
        "Estimate {} written to {}",
        document.document_number,
        path.display()
    );
    Ok(())
}
