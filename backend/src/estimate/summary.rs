//! Result summary
//!
//! Turns a [`CalculationResult`] into labelled lines with tax-inclusive
//! figures, and renders those lines as plain text for pasting into mail or
//! case notes.

use serde::Serialize;

use crate::core::format::format_yen;
use crate::core::units::with_tax;
use crate::models::{CalculationResult, FeeDetail};

/// Header of the plain-text rendering
pub const SUMMARY_HEADER: &str = "[Attorney Fee Estimate]";

/// Caveat printed under the header
pub const SUMMARY_CAVEAT: &str = "(Approximate, based on the former JFBA fee standard)";

/// One labelled amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: i64,
    /// Derivation shown under the amount, when the category has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Emphasized as a total
    pub is_total: bool,
}

impl SummaryLine {
    fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
            formula: None,
            is_total: false,
        }
    }

    fn with_formula(mut self, formula: &str) -> Self {
        if !formula.is_empty() {
            self.formula = Some(formula.to_string());
        }
        self
    }

    fn total(mut self) -> Self {
        self.is_total = true;
        self
    }
}

/// Labelled lines for one result at one tax rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub tax_rate: f64,
    pub lines: Vec<SummaryLine>,
    pub explanatory_note: Option<String>,
}

impl ResultSummary {
    /// Build the summary lines
    ///
    /// `tax_rate` is a fraction; 0 suppresses every tax-inclusive line.
    ///
    /// # Example
    /// ```
    /// use fee_calculator_core_rs::calculator::calculate_litigation;
    /// use fee_calculator_core_rs::estimate::ResultSummary;
    /// use fee_calculator_core_rs::{FeeSchedule, LitigationOptions};
    ///
    /// let result =
    ///     calculate_litigation(FeeSchedule::standard(), &LitigationOptions::for_amount(500.0));
    /// let summary = ResultSummary::from_result(&result, 0.10);
    /// assert_eq!(summary.grand_total(), Some(1_122_000));
    /// ```
    pub fn from_result(result: &CalculationResult, tax_rate: f64) -> Self {
        let taxed = tax_rate > 0.0;
        let mut lines = Vec::new();

        match &result.detail {
            FeeDetail::Advisory {
                monthly_fee,
                total_fee,
                months,
            } => {
                lines.push(SummaryLine::new("Monthly advisory fee (ex. tax)", *monthly_fee));
                if taxed {
                    lines.push(SummaryLine::new(
                        "Monthly advisory fee (inc. tax)",
                        with_tax(*monthly_fee, tax_rate),
                    ));
                }
                lines.push(SummaryLine::new(
                    format!("{} months (ex. tax)", months),
                    *total_fee,
                ));
                if taxed {
                    lines.push(
                        SummaryLine::new(
                            format!("{} months (inc. tax)", months),
                            with_tax(*total_fee, tax_rate),
                        )
                        .total(),
                    );
                }
            }
            FeeDetail::Daily {
                per_day,
                total,
                days,
            } => {
                lines.push(SummaryLine::new("Per day (ex. tax)", *per_day));
                if taxed {
                    lines.push(SummaryLine::new(
                        "Per day (inc. tax)",
                        with_tax(*per_day, tax_rate),
                    ));
                }
                if *days > 1 {
                    lines.push(SummaryLine::new(format!("{} days (ex. tax)", days), *total));
                    if taxed {
                        lines.push(
                            SummaryLine::new(
                                format!("{} days (inc. tax)", days),
                                with_tax(*total, tax_rate),
                            )
                            .total(),
                        );
                    }
                }
            }
            FeeDetail::Standard
            | FeeDetail::PaymentOrder { .. }
            | FeeDetail::Preservation { .. } => {
                standard_lines(result, tax_rate, &mut lines);
            }
        }

        Self {
            tax_rate,
            lines,
            explanatory_note: result.explanatory_note.clone(),
        }
    }

    /// The emphasized total, if any line carries one
    pub fn grand_total(&self) -> Option<i64> {
        self.lines.iter().rev().find(|l| l.is_total).map(|l| l.amount)
    }

    /// Plain-text rendering: header, one `label: value` line per item, then
    /// the explanatory note
    pub fn copy_text(&self) -> String {
        let mut text = format!("{}\n{}\n\n", SUMMARY_HEADER, SUMMARY_CAVEAT);
        for line in &self.lines {
            text.push_str(&format!("{}: {}\n", line.label, format_yen(line.amount)));
        }
        if let Some(note) = &self.explanatory_note {
            text.push_str(&format!("\nNote: {}", note));
        }
        text
    }
}

fn standard_lines(result: &CalculationResult, tax_rate: f64, lines: &mut Vec<SummaryLine>) {
    let taxed = tax_rate > 0.0;
    let retainer_inc = with_tax(result.retainer_fee, tax_rate);
    let success_inc = with_tax(result.success_fee, tax_rate);

    lines.push(
        SummaryLine::new("Retainer (ex. tax)", result.retainer_fee)
            .with_formula(&result.retainer_formula),
    );
    if taxed {
        lines.push(SummaryLine::new("Retainer (inc. tax)", retainer_inc));
    }

    if result.success_fee > 0 {
        lines.push(
            SummaryLine::new("Success fee (ex. tax)", result.success_fee)
                .with_formula(&result.success_formula),
        );
        if taxed {
            lines.push(SummaryLine::new("Success fee (inc. tax)", success_inc));
        }
    }

    let surcharge = result.transition_surcharge();
    if surcharge > 0 {
        lines.push(SummaryLine::new(
            "Additional retainer on moving to litigation (ex. tax)",
            surcharge,
        ));
    }

    if taxed && (result.retainer_fee > 0 || result.success_fee > 0) {
        let total = retainer_inc.saturating_add(success_inc);
        lines.push(SummaryLine::new("Total (inc. tax)", total).total());
    }
}
