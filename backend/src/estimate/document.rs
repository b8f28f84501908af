//! Estimate document
//!
//! A client-facing quote built from one calculation result: itemized rows,
//! subtotal, consumption tax and total, with the office's letterhead.
//! Every document carries a random document number and the fingerprint of
//! the fee schedule that produced its figures.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::format::{format_rate_percent, format_yen};
use crate::core::units::round_minor;
use crate::models::{CalculationResult, CaseCategory, FeeDetail};
use crate::schedule::FeeSchedule;

/// Default estimate validity
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// Letterhead and free text for an estimate
///
/// Every field has a placeholder default, so a settings file only needs the
/// fields the office wants to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    /// Law office name
    pub office: String,

    /// Lawyer's name as printed on the document
    pub lawyer: String,

    /// Office address; omitted from the document when empty
    pub address: String,

    /// Office telephone; omitted from the document when empty
    pub telephone: String,

    /// Addressee
    pub client: String,

    /// Matter the estimate is for
    pub case_title: String,

    /// Remarks, one per line
    pub notes: String,

    /// Days from the issue date the estimate stays valid
    pub validity_days: u32,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            office: "[Law Office Name]".to_string(),
            lawyer: "Attorney [Name]".to_string(),
            address: String::new(),
            telephone: String::new(),
            client: "[Client Name]".to_string(),
            case_title: "[Matter]".to_string(),
            notes: "- Actual expenses (stamp duty, postage, travel) are billed separately.\n\
                    - The amounts above are approximate and may change as the matter proceeds."
                .to_string(),
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

/// One itemized line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateRow {
    pub label: String,
    pub amount: i64,
    /// Shown for information only, not added to the subtotal
    pub informational: bool,
}

impl EstimateRow {
    fn billed(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
            informational: false,
        }
    }
}

/// A complete estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateDocument {
    pub document_number: Uuid,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub schedule_fingerprint: String,
    pub category: CaseCategory,
    pub settings: EstimateSettings,
    pub rows: Vec<EstimateRow>,
    pub subtotal: i64,
    pub tax_rate: f64,
    pub tax: i64,
    pub total: i64,
}

/// Rows and subtotal for a result
///
/// Advisory and daily rates bill their totals; other categories bill the
/// retainer and success fee. A payment order's transition surcharge is
/// listed but excluded from the subtotal.
pub fn estimate_rows(result: &CalculationResult) -> (Vec<EstimateRow>, i64) {
    match &result.detail {
        FeeDetail::Advisory {
            monthly_fee,
            total_fee,
            months,
        } => (
            vec![
                EstimateRow::billed("Monthly advisory fee", *monthly_fee),
                EstimateRow::billed(format!("{} months", months), *total_fee),
            ],
            *total_fee,
        ),
        FeeDetail::Daily { total, days, .. } => (
            vec![EstimateRow::billed(format!("Daily rate ({} days)", days), *total)],
            *total,
        ),
        FeeDetail::Standard | FeeDetail::PaymentOrder { .. } | FeeDetail::Preservation { .. } => {
            let mut rows = Vec::new();
            let mut subtotal: i64 = 0;
            if result.retainer_fee > 0 {
                rows.push(EstimateRow::billed("Retainer", result.retainer_fee));
                subtotal = subtotal.saturating_add(result.retainer_fee);
            }
            if result.success_fee > 0 {
                rows.push(EstimateRow::billed("Success fee (on success)", result.success_fee));
                subtotal = subtotal.saturating_add(result.success_fee);
            }
            let surcharge = result.transition_surcharge();
            if surcharge > 0 {
                rows.push(EstimateRow {
                    label: "Additional retainer on moving to litigation".to_string(),
                    amount: surcharge,
                    informational: true,
                });
            }
            (rows, subtotal)
        }
    }
}

impl EstimateDocument {
    /// Assemble an estimate issued on `issue_date`
    pub fn build(
        result: &CalculationResult,
        tax_rate: f64,
        settings: EstimateSettings,
        schedule: &FeeSchedule,
        issue_date: NaiveDate,
    ) -> Self {
        let (rows, subtotal) = estimate_rows(result);
        let tax = if tax_rate > 0.0 {
            round_minor(subtotal as f64 * tax_rate)
        } else {
            0
        };
        let valid_until = issue_date
            .checked_add_days(Days::new(u64::from(settings.validity_days)))
            .unwrap_or(NaiveDate::MAX);

        let document = Self {
            document_number: Uuid::new_v4(),
            issue_date,
            valid_until,
            schedule_fingerprint: schedule.fingerprint(),
            category: result.category,
            settings,
            rows,
            subtotal,
            tax_rate,
            tax,
            total: subtotal.saturating_add(tax),
        };

        info!(
            document_number = %document.document_number,
            category = document.category.as_str(),
            subtotal = document.subtotal,
            total = document.total,
            "estimate assembled"
        );
        document
    }

    /// Render as plain text
    pub fn render_text(&self) -> String {
        const LABEL_WIDTH: usize = 44;
        const AMOUNT_WIDTH: usize = 16;

        let s = &self.settings;
        let mut out = String::new();
        let mut line = |text: &str| {
            out.push_str(text);
            out.push('\n');
        };
        let row = |label: &str, amount: i64| {
            format!(
                "{:<lw$}{:>aw$}",
                label,
                format_yen(amount),
                lw = LABEL_WIDTH,
                aw = AMOUNT_WIDTH
            )
        };
        let rule = "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH);

        line("ESTIMATE");
        line("");
        line(&format!("Document No.: {}", self.document_number));
        line(&format!("Issue date:   {}", self.issue_date.format("%Y-%m-%d")));
        line("");
        line(&s.client);
        line("We are pleased to submit the following estimate.");
        line("");
        line(&s.office);
        line(&s.lawyer);
        if !s.address.is_empty() {
            line(&s.address);
        }
        if !s.telephone.is_empty() {
            line(&format!("TEL: {}", s.telephone));
        }
        line("");
        line(&format!("Matter:   {}", s.case_title));
        line(&format!("Category: {}", self.category.display_name()));
        line("");
        line(&format!(
            "{:<lw$}{:>aw$}",
            "Item",
            "Amount (ex. tax)",
            lw = LABEL_WIDTH,
            aw = AMOUNT_WIDTH
        ));
        line(&rule);
        for r in &self.rows {
            if r.informational {
                line(&row(&format!("{} *", r.label), r.amount));
            } else {
                line(&row(&r.label, r.amount));
            }
        }
        line(&rule);
        line(&row("Subtotal", self.subtotal));
        line(&row(
            &format!("Consumption tax ({}%)", format_rate_percent(self.tax_rate)),
            self.tax,
        ));
        line(&row("Total", self.total));
        if self.rows.iter().any(|r| r.informational) {
            line("");
            line("* Not included in the subtotal");
        }
        line("");
        line("Notes");
        for note in s.notes.lines() {
            line(note);
        }
        line("");
        line(&format!(
            "Valid until: {} ({} days from issue)",
            self.valid_until.format("%Y-%m-%d"),
            s.validity_days
        ));
        line(&format!("Fee schedule: {}", self.schedule_fingerprint));
        out
    }
}

/// Default file name for an estimate written at `now`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use fee_calculator_core_rs::estimate::estimate_file_name;
///
/// let now = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap().and_hms_opt(14, 5, 0).unwrap();
/// assert_eq!(estimate_file_name(now), "Estimate_20260309_1405.txt");
/// ```
pub fn estimate_file_name(now: NaiveDateTime) -> String {
    format!("Estimate_{}.txt", now.format("%Y%m%d_%H%M"))
}
