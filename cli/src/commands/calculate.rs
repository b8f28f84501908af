//! Calculate command

use anyhow::Result;
use fee_calculator_core_rs::core::format::format_yen;
use fee_calculator_core_rs::{calculate, CalculationResult, FeeSchedule, ResultSummary};

use super::load_request;

/// Run the calculate command
pub fn run(request_path: &str, tax_rate: f64, json: bool) -> Result<()> {
    let request = load_request(request_path)?;
    let result = calculate(FeeSchedule::standard(), &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result, tax_rate));
    }
    Ok(())
}

/// Human-readable result: summary lines with formulas, then the derivation
fn render(result: &CalculationResult, tax_rate: f64) -> String {
    let summary = ResultSummary::from_result(result, tax_rate);
    let mut out = format!("{}\n\n", result.category.display_name());

    for line in &summary.lines {
        out.push_str(&format!("{}: {}\n", line.label, format_yen(line.amount)));
        if let Some(formula) = &line.formula {
            out.push_str(&format!("    = {}\n", formula));
        }
    }

    if !result.notes.is_empty() {
        out.push_str("\nDerivation:\n");
        for note in &result.notes {
            out.push_str(&format!("  - {}\n", note));
        }
    }
    if let Some(note) = &summary.explanatory_note {
        out.push_str(&format!("\nNote: {}\n", note));
    }
    out
}
