//! Tiered Fee Tests
//!
//! Litigation, promissory-instrument litigation, contract negotiation and
//! payment orders against the published schedule.

use fee_calculator_core_rs::calculator::{
    calculate_litigation, calculate_negotiation, calculate_payment_order,
};
use fee_calculator_core_rs::{
    FeeSchedule, LitigationOptions, NegotiationOptions, NoteCode, PaymentOrderOptions,
};

fn litigation(options: LitigationOptions) -> (i64, i64) {
    let result = calculate_litigation(FeeSchedule::standard(), &options);
    (result.retainer_fee, result.success_fee)
}

// ============================================================================
// Litigation
// ============================================================================

#[test]
fn test_litigation_each_tier() {
    assert_eq!(litigation(LitigationOptions::for_amount(300.0)), (240_000, 480_000));
    assert_eq!(litigation(LitigationOptions::for_amount(500.0)), (340_000, 680_000));
    assert_eq!(
        litigation(LitigationOptions::for_amount(3_000.0)),
        (1_590_000, 3_180_000)
    );
    assert_eq!(
        litigation(LitigationOptions::for_amount(50_000.0)),
        (13_690_000, 27_380_000)
    );
}

#[test]
fn test_litigation_is_continuous_across_tier_boundary() {
    // 3001 × 3% + 69 = 159.03 against 159 at the boundary
    let (below, _) = litigation(LitigationOptions::for_amount(3_000.0));
    let (above, _) = litigation(LitigationOptions::for_amount(3_001.0));
    assert_eq!(above - below, 300);
}

#[test]
fn test_continued_representation_halves_retainer() {
    let result = calculate_litigation(
        FeeSchedule::standard(),
        &LitigationOptions {
            amount: 500.0,
            is_continued_representation: true,
            ..Default::default()
        },
    );
    assert_eq!(result.retainer_fee, 170_000);
    assert_eq!(result.success_fee, 680_000);
    assert_eq!(result.retainer_formula, "500万円 × 5% + 9万円 × 1/2");
}

#[test]
fn test_small_claim_hits_minimum_retainer() {
    let result =
        calculate_litigation(FeeSchedule::standard(), &LitigationOptions::for_amount(50.0));
    assert_eq!(result.retainer_fee, 100_000);
    assert_eq!(result.success_fee, 80_000);
    assert_eq!(result.retainer_formula, "Minimum retainer of 10万円 applied");
    assert!(result.has_note(NoteCode::MinimumRetainer));
}

#[test]
fn test_adjustment_applies_after_floor() {
    // Floor lifts 4 to 10, then -20% gives 8
    let result = calculate_litigation(
        FeeSchedule::standard(),
        &LitigationOptions {
            amount: 50.0,
            adjustment_percent: -20.0,
            ..Default::default()
        },
    );
    assert_eq!(result.retainer_fee, 80_000);
}

#[test]
fn test_success_fee_only_folds_retainer() {
    let result = calculate_litigation(
        FeeSchedule::standard(),
        &LitigationOptions {
            amount: 500.0,
            is_success_fee_only: true,
            ..Default::default()
        },
    );
    assert_eq!(result.retainer_fee, 0);
    assert_eq!(result.success_fee, 1_020_000);
    assert_eq!(result.retainer_formula, "No retainer");
    assert_eq!(result.success_formula, "Success fee + retainer equivalent");
}

#[test]
fn test_success_fee_only_drops_minimum_retainer_note() {
    let result = calculate_litigation(
        FeeSchedule::standard(),
        &LitigationOptions {
            amount: 50.0,
            is_success_fee_only: true,
            ..Default::default()
        },
    );
    // Floored retainer of 10万円 plus 50 × 16%
    assert_eq!(result.retainer_fee, 0);
    assert_eq!(result.success_fee, 180_000);
    assert!(!result.has_note(NoteCode::MinimumRetainer));
    assert!(result.has_note(NoteCode::SuccessFeeOnly));
    assert_eq!(result.retainer_formula, "No retainer");
}

#[test]
fn test_adjustment_below_minus_hundred_clamps_to_zero() {
    let (retainer, success) = litigation(LitigationOptions {
        amount: 500.0,
        adjustment_percent: -150.0,
        ..Default::default()
    });
    assert_eq!((retainer, success), (0, 0));
}

#[test]
fn test_non_positive_amounts_give_zero() {
    for amount in [0.0, -100.0, f64::NAN] {
        let result =
            calculate_litigation(FeeSchedule::standard(), &LitigationOptions::for_amount(amount));
        assert_eq!(result.retainer_fee, 0);
        assert_eq!(result.success_fee, 0);
        assert!(result.notes.is_empty());
    }
}

#[test]
fn test_promissory_instrument_table() {
    assert_eq!(
        litigation(LitigationOptions {
            amount: 5_000.0,
            is_promissory_instrument: true,
            ..Default::default()
        }),
        (1_095_000, 2_190_000)
    );
}

// ============================================================================
// Contract negotiation
// ============================================================================

#[test]
fn test_negotiation_third_tier() {
    let result = calculate_negotiation(
        FeeSchedule::standard(),
        &NegotiationOptions {
            amount: 10_000.0,
            adjustment_percent: 0.0,
        },
    );
    assert_eq!(result.retainer_fee, 680_000);
    assert_eq!(result.success_fee, 1_360_000);
}

#[test]
fn test_negotiation_adjustment() {
    let result = calculate_negotiation(
        FeeSchedule::standard(),
        &NegotiationOptions {
            amount: 10_000.0,
            adjustment_percent: 25.0,
        },
    );
    assert_eq!(result.retainer_fee, 850_000);
    assert_eq!(result.success_fee, 1_700_000);
    assert_eq!(result.retainer_formula, "10,000万円 × 0.5% + 18万円 × (1+25%)");
}

// ============================================================================
// Payment order
// ============================================================================

#[test]
fn test_payment_order_worked_example() {
    let result = calculate_payment_order(
        FeeSchedule::standard(),
        &PaymentOrderOptions {
            amount: 5_000.0,
            may_escalate_to_litigation: true,
        },
    );
    assert_eq!(result.retainer_fee, 430_000);
    assert_eq!(result.success_fee, 2_190_000);
    assert_eq!(result.transition_surcharge(), 1_760_000);
    assert_eq!(result.notes[0].text, "Claimed amount: 5,000万円");
    assert!(result.has_note(NoteCode::RecoveryCondition));
    assert!(result.has_note(NoteCode::TransitionSurcharge));
}

#[test]
fn test_payment_order_zero_amount() {
    let result = calculate_payment_order(
        FeeSchedule::standard(),
        &PaymentOrderOptions {
            amount: 0.0,
            may_escalate_to_litigation: true,
        },
    );
    assert_eq!(result.retainer_fee, 0);
    assert_eq!(result.transition_surcharge(), 0);
}
