//! Civil litigation fees
//!
//! Covers ordinary suits, mediation and settlement negotiation (2/3 of the
//! litigation figures), and suits on promissory notes or checks (their own
//! half-rate table, to which the negotiation discount does not apply).

use super::tiered::TieredComputation;
use crate::core::units::is_chargeable;
use crate::models::{CalculationResult, CaseCategory, LitigationOptions};
use crate::schedule::FeeSchedule;

/// Run the litigation pipeline without converting to yen
///
/// Divorce and preservation reuse the native-unit figures so that rounding
/// still happens once, on their own final totals. Returns `None` for a
/// non-positive amount.
pub(crate) fn litigation_computation(
    schedule: &FeeSchedule,
    options: &LitigationOptions,
) -> Option<TieredComputation> {
    if !is_chargeable(options.amount) {
        return None;
    }

    let table = if options.is_promissory_instrument {
        &schedule.promissory
    } else {
        &schedule.litigation
    };

    let mut comp = TieredComputation::start(table, options.amount);

    if options.is_negotiation_settlement && !options.is_promissory_instrument {
        comp.apply_negotiation_discount(schedule.negotiation_discount);
    }
    if options.is_continued_representation {
        comp.halve_retainer();
    }
    comp.apply_minimum_retainer(table.minimum_retainer);
    comp.apply_adjustment(options.adjustment_percent);
    comp.apply_expertise(options.expertise_percent);
    if options.is_success_fee_only {
        comp.fold_into_success();
    }

    Some(comp)
}

/// Calculate civil litigation fees
///
/// # Example
/// ```
/// use fee_calculator_core_rs::calculator::calculate_litigation;
/// use fee_calculator_core_rs::{FeeSchedule, LitigationOptions};
///
/// let result = calculate_litigation(
///     FeeSchedule::standard(),
///     &LitigationOptions::for_amount(500.0),
/// );
/// assert_eq!(result.retainer_fee, 340_000);
/// assert_eq!(result.success_fee, 680_000);
/// assert_eq!(result.retainer_formula, "500万円 × 5% + 9万円");
/// ```
pub fn calculate_litigation(
    schedule: &FeeSchedule,
    options: &LitigationOptions,
) -> CalculationResult {
    match litigation_computation(schedule, options) {
        Some(comp) => comp.into_result(CaseCategory::Litigation),
        None => CalculationResult::zero(CaseCategory::Litigation),
    }
}
