//! Advisory retainer fees
//!
//! A monthly fee over a contract period. No retainer or success fee in the
//! litigation sense; the figures live in [`FeeDetail::Advisory`].

use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    AdvisoryOptions, AdvisoryPlan, CalculationResult, CaseCategory, DerivationNote, FeeDetail,
    NoteCode,
};
use crate::schedule::FeeSchedule;

/// Calculate advisory retainer fees
///
/// # Example
/// ```
/// use fee_calculator_core_rs::calculator::calculate_advisory;
/// use fee_calculator_core_rs::models::{AdvisoryOptions, EntityScale, FeeDetail};
/// use fee_calculator_core_rs::FeeSchedule;
///
/// let result = calculate_advisory(
///     FeeSchedule::standard(),
///     &AdvisoryOptions { scale: EntityScale::Medium, ..Default::default() },
/// );
/// assert_eq!(
///     result.detail,
///     FeeDetail::Advisory { monthly_fee: 100_000, total_fee: 1_200_000, months: 12 }
/// );
/// ```
pub fn calculate_advisory(schedule: &FeeSchedule, options: &AdvisoryOptions) -> CalculationResult {
    let (monthly, plan_label) = match options.plan {
        AdvisoryPlan::Business => (
            schedule.advisory.business.get(options.scale),
            format!("Business advisory ({})", options.scale.label()),
        ),
        AdvisoryPlan::Individual => (
            schedule.advisory.individual,
            "Individual (non-business) advisory".to_string(),
        ),
    };
    let total = monthly * f64::from(options.months);

    let notes = vec![
        DerivationNote::new(NoteCode::Plan, plan_label),
        DerivationNote::new(
            NoteCode::UnitRate,
            format!("Monthly: {}{}", format_native(monthly), NATIVE_UNIT_LABEL),
        ),
        DerivationNote::new(
            NoteCode::Period,
            format!("Contract period: {} months", options.months),
        ),
    ];

    CalculationResult {
        notes,
        detail: FeeDetail::Advisory {
            monthly_fee: to_minor_units(monthly),
            total_fee: to_minor_units(total),
            months: options.months,
        },
        ..CalculationResult::zero(CaseCategory::AdvisoryRetainer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityScale;

    #[test]
    fn test_individual_plan() {
        let result = calculate_advisory(
            FeeSchedule::standard(),
            &AdvisoryOptions {
                plan: AdvisoryPlan::Individual,
                scale: EntityScale::Large,
                months: 6,
            },
        );
        assert_eq!(result.retainer_fee, 0);
        assert_eq!(result.success_fee, 0);
        assert_eq!(
            result.detail,
            FeeDetail::Advisory {
                monthly_fee: 5_000,
                total_fee: 30_000,
                months: 6
            }
        );
        assert_eq!(result.notes[0].text, "Individual (non-business) advisory");
    }

    #[test]
    fn test_business_scale_label() {
        let result = calculate_advisory(
            FeeSchedule::standard(),
            &AdvisoryOptions {
                scale: EntityScale::Large,
                months: 24,
                ..Default::default()
            },
        );
        assert_eq!(result.notes[0].text, "Business advisory (large)");
        assert_eq!(result.notes[2].text, "Contract period: 24 months");
    }
}
