//! Estimate Tests
//!
//! Result summaries and estimate documents built from real calculations.

use chrono::NaiveDate;
use fee_calculator_core_rs::calculator::{
    calculate_advisory, calculate_daily, calculate_insolvency, calculate_litigation,
    calculate_payment_order,
};
use fee_calculator_core_rs::core::units::MAX_FEE_YEN;
use fee_calculator_core_rs::estimate::{SUMMARY_CAVEAT, SUMMARY_HEADER};
use fee_calculator_core_rs::models::{DailyDuration, EntityScale};
use fee_calculator_core_rs::{
    AdvisoryOptions, DailyRateOptions, EstimateDocument, EstimateSettings, FeeSchedule,
    InsolvencyOptions, LitigationOptions, PaymentOrderOptions, ResultSummary,
};

fn issue_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn labels(summary: &ResultSummary) -> Vec<&str> {
    summary.lines.iter().map(|l| l.label.as_str()).collect()
}

// ============================================================================
// Result summary
// ============================================================================

#[test]
fn test_litigation_summary_with_tax() {
    let result =
        calculate_litigation(FeeSchedule::standard(), &LitigationOptions::for_amount(500.0));
    let summary = ResultSummary::from_result(&result, 0.10);

    assert_eq!(
        labels(&summary),
        vec![
            "Retainer (ex. tax)",
            "Retainer (inc. tax)",
            "Success fee (ex. tax)",
            "Success fee (inc. tax)",
            "Total (inc. tax)",
        ]
    );
    let amounts: Vec<i64> = summary.lines.iter().map(|l| l.amount).collect();
    assert_eq!(amounts, vec![340_000, 374_000, 680_000, 748_000, 1_122_000]);
}

#[test]
fn test_payment_order_summary_shows_surcharge() {
    let result = calculate_payment_order(
        FeeSchedule::standard(),
        &PaymentOrderOptions {
            amount: 5_000.0,
            may_escalate_to_litigation: true,
        },
    );
    let summary = ResultSummary::from_result(&result, 0.0);
    assert_eq!(
        labels(&summary),
        vec![
            "Retainer (ex. tax)",
            "Success fee (ex. tax)",
            "Additional retainer on moving to litigation (ex. tax)",
        ]
    );
    assert_eq!(summary.lines[2].amount, 1_760_000);
}

#[test]
fn test_advisory_summary() {
    let result = calculate_advisory(
        FeeSchedule::standard(),
        &AdvisoryOptions {
            scale: EntityScale::Medium,
            ..Default::default()
        },
    );
    let summary = ResultSummary::from_result(&result, 0.10);
    assert_eq!(
        labels(&summary),
        vec![
            "Monthly advisory fee (ex. tax)",
            "Monthly advisory fee (inc. tax)",
            "12 months (ex. tax)",
            "12 months (inc. tax)",
        ]
    );
    assert_eq!(summary.grand_total(), Some(1_320_000));
}

#[test]
fn test_daily_summary_multiple_days() {
    let result = calculate_daily(
        FeeSchedule::standard(),
        &DailyRateOptions {
            duration: DailyDuration::FullDay,
            rate: None,
            days: 3,
        },
    );
    let summary = ResultSummary::from_result(&result, 0.10);
    let amounts: Vec<i64> = summary.lines.iter().map(|l| l.amount).collect();
    assert_eq!(amounts, vec![75_000, 82_500, 225_000, 247_500]);
}

#[test]
fn test_copy_text_includes_explanatory_note() {
    let result = calculate_insolvency(FeeSchedule::standard(), &InsolvencyOptions::default());
    let text = ResultSummary::from_result(&result, 0.10).copy_text();

    assert!(text.starts_with(&format!("{}\n{}\n\n", SUMMARY_HEADER, SUMMARY_CAVEAT)));
    assert!(text.contains("Retainer (ex. tax): ¥200,000\n"));
    assert!(text.contains("Total (inc. tax): ¥220,000\n"));
    assert!(!text.contains("Success fee"));
    assert!(text.ends_with("discharge order is granted"));
}

// ============================================================================
// Estimate document
// ============================================================================

#[test]
fn test_payment_order_estimate_excludes_surcharge() {
    let schedule = FeeSchedule::standard();
    let result = calculate_payment_order(
        schedule,
        &PaymentOrderOptions {
            amount: 5_000.0,
            may_escalate_to_litigation: true,
        },
    );
    let doc = EstimateDocument::build(
        &result,
        0.10,
        EstimateSettings::default(),
        schedule,
        issue_date(),
    );

    assert_eq!(doc.rows.len(), 3);
    assert_eq!(doc.subtotal, 2_620_000);
    assert_eq!(doc.tax, 262_000);
    assert_eq!(doc.total, 2_882_000);

    let text = doc.render_text();
    assert!(text.contains("Additional retainer on moving to litigation *"));
    assert!(text.contains("* Not included in the subtotal"));
}

#[test]
fn test_advisory_estimate_bills_total() {
    let schedule = FeeSchedule::standard();
    let result = calculate_advisory(
        schedule,
        &AdvisoryOptions {
            scale: EntityScale::Medium,
            ..Default::default()
        },
    );
    let doc = EstimateDocument::build(
        &result,
        0.10,
        EstimateSettings::default(),
        schedule,
        issue_date(),
    );
    assert_eq!(doc.subtotal, 1_200_000);
    assert_eq!(doc.tax, 120_000);
    assert_eq!(doc.total, 1_320_000);
}

#[test]
fn test_estimate_identity_and_dates() {
    let schedule = FeeSchedule::standard();
    let result = calculate_litigation(schedule, &LitigationOptions::for_amount(500.0));
    let settings = EstimateSettings {
        validity_days: 14,
        ..Default::default()
    };

    let first = EstimateDocument::build(&result, 0.10, settings.clone(), schedule, issue_date());
    let second = EstimateDocument::build(&result, 0.10, settings, schedule, issue_date());

    assert_ne!(first.document_number, second.document_number);
    assert_eq!(first.schedule_fingerprint, schedule.fingerprint());
    assert_eq!(first.valid_until, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
    assert_eq!(first.subtotal, 1_020_000);
    assert_eq!(first.tax, 102_000);

    let text = first.render_text();
    assert!(text.contains("Issue date:   2026-10-18"));
    assert!(text.contains("Category: Civil litigation"));
    assert!(text.contains(&first.schedule_fingerprint));
}

#[test]
fn test_huge_amount_is_capped_not_overflowed() {
    let schedule = FeeSchedule::standard();
    let result = calculate_litigation(schedule, &LitigationOptions::for_amount(1e17));
    assert_eq!(result.retainer_fee, MAX_FEE_YEN);
    assert_eq!(result.success_fee, MAX_FEE_YEN);

    let summary = ResultSummary::from_result(&result, 0.10);
    assert_eq!(summary.grand_total(), Some(2 * MAX_FEE_YEN));

    let doc = EstimateDocument::build(
        &result,
        0.10,
        EstimateSettings::default(),
        schedule,
        issue_date(),
    );
    assert_eq!(doc.subtotal, 2 * MAX_FEE_YEN);
    assert_eq!(doc.total, doc.subtotal + doc.tax);
    assert!(doc.render_text().contains("Total"));
}
