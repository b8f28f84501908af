//! Payment order fees
//!
//! The retainer follows the contract-negotiation table with its own floor;
//! the success fee is half the litigation success fee and is only
//! chargeable once money is actually recovered. If the debtor objects and
//! the matter becomes ordinary litigation, the difference up to the full
//! litigation retainer is charged separately as a transition surcharge.

use super::tiered::rate_trail;
use crate::core::format::format_native;
use crate::core::units::{is_chargeable, to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    CalculationResult, CaseCategory, DerivationNote, FeeDetail, NoteCode, PaymentOrderOptions,
};
use crate::schedule::{FeeSchedule, TierFigures};

/// Calculate payment order fees
///
/// # Example
/// ```
/// use fee_calculator_core_rs::calculator::calculate_payment_order;
/// use fee_calculator_core_rs::{FeeSchedule, PaymentOrderOptions};
///
/// let result = calculate_payment_order(
///     FeeSchedule::standard(),
///     &PaymentOrderOptions { amount: 5000.0, may_escalate_to_litigation: true },
/// );
/// assert_eq!(result.retainer_fee, 430_000);
/// assert_eq!(result.success_fee, 2_190_000);
/// assert_eq!(result.transition_surcharge(), 1_760_000);
/// ```
pub fn calculate_payment_order(
    schedule: &FeeSchedule,
    options: &PaymentOrderOptions,
) -> CalculationResult {
    if !is_chargeable(options.amount) {
        let mut result = CalculationResult::zero(CaseCategory::PaymentOrder);
        result.detail = FeeDetail::PaymentOrder {
            transition_surcharge: None,
        };
        return result;
    }

    let amount = options.amount;
    let minimum = schedule.payment_order_minimum_retainer;
    let negotiation: TierFigures = schedule.negotiation.evaluate(amount);
    let litigation: TierFigures = schedule.litigation.evaluate(amount);

    let mut notes = vec![
        DerivationNote::new(
            NoteCode::EconomicValue,
            format!("Claimed amount: {}{}", format_native(amount), NATIVE_UNIT_LABEL),
        ),
        DerivationNote::new(
            NoteCode::RecoveryCondition,
            "Success fee is chargeable only upon actual recovery of money or property",
        ),
    ];

    let mut retainer = negotiation.retainer;
    let mut retainer_trail = rate_trail(
        amount,
        negotiation.rates.retainer_rate,
        negotiation.retainer_additive,
    );
    if retainer < minimum {
        retainer = minimum;
        let text = format!(
            "Minimum retainer of {}{} applied",
            format_native(minimum),
            NATIVE_UNIT_LABEL
        );
        retainer_trail.replace(text.clone());
        notes.insert(1, DerivationNote::new(NoteCode::MinimumRetainer, text));
    }

    let success = litigation.success * schedule.payment_order_success_ratio;
    let mut success_trail = rate_trail(
        amount,
        litigation.rates.success_rate,
        litigation.success_additive,
    );
    success_trail.wrap("× 1/2");

    let transition_surcharge = if options.may_escalate_to_litigation {
        let difference = (litigation.retainer - retainer).max(0.0);
        notes.push(DerivationNote::new(
            NoteCode::TransitionSurcharge,
            format!(
                "Additional retainer if the case moves into litigation: {}{}",
                format_native(difference),
                NATIVE_UNIT_LABEL
            ),
        ));
        Some(to_minor_units(difference))
    } else {
        None
    };

    CalculationResult {
        category: CaseCategory::PaymentOrder,
        retainer_fee: to_minor_units(retainer),
        success_fee: to_minor_units(success),
        retainer_formula: retainer_trail.render(),
        success_formula: success_trail.render(),
        notes,
        explanatory_note: None,
        detail: FeeDetail::PaymentOrder {
            transition_surcharge,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(amount: f64, escalate: bool) -> CalculationResult {
        calculate_payment_order(
            FeeSchedule::standard(),
            &PaymentOrderOptions {
                amount,
                may_escalate_to_litigation: escalate,
            },
        )
    }

    #[test]
    fn test_success_formula_is_halved_litigation() {
        let result = calc(5_000.0, false);
        assert_eq!(result.success_formula, "(5,000万円 × 6% + 138万円) × 1/2");
        assert_eq!(result.retainer_formula, "5,000万円 × 0.5% + 18万円");
        assert_eq!(result.transition_surcharge(), 0);
        assert_eq!(
            result.detail,
            FeeDetail::PaymentOrder {
                transition_surcharge: None
            }
        );
    }

    #[test]
    fn test_floor_and_surcharge_for_small_claim() {
        // Negotiation retainer 100 × 2% = 2 -> floored at 5.
        // Litigation retainer 100 × 8% = 8, so the surcharge is 3.
        let result = calc(100.0, true);
        assert_eq!(result.retainer_fee, 50_000);
        assert_eq!(result.success_fee, 80_000);
        assert_eq!(result.transition_surcharge(), 30_000);
        assert!(result.has_note(NoteCode::MinimumRetainer));
    }

    #[test]
    fn test_surcharge_never_negative() {
        // Litigation retainer 10 × 8% = 0.8 is below the floored 5
        let result = calc(10.0, true);
        assert_eq!(result.retainer_fee, 50_000);
        assert_eq!(
            result.detail,
            FeeDetail::PaymentOrder {
                transition_surcharge: Some(0)
            }
        );
    }

    #[test]
    fn test_recovery_condition_always_noted() {
        let result = calc(800.0, false);
        assert!(result.has_note(NoteCode::RecoveryCondition));
        assert!(!result.has_note(NoteCode::TransitionSurcharge));
    }
}
