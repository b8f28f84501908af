//! Contract negotiation fees
//!
//! Same tier boundaries as litigation at a quarter of its rates, with its
//! own minimum retainer.

use super::tiered::TieredComputation;
use crate::core::format::format_native;
use crate::core::units::{is_chargeable, NATIVE_UNIT_LABEL};
use crate::models::{CalculationResult, CaseCategory, NegotiationOptions, NoteCode};
use crate::schedule::FeeSchedule;

/// Calculate contract negotiation fees
pub fn calculate_negotiation(
    schedule: &FeeSchedule,
    options: &NegotiationOptions,
) -> CalculationResult {
    if !is_chargeable(options.amount) {
        return CalculationResult::zero(CaseCategory::ContractNegotiation);
    }

    let table = &schedule.negotiation;
    let mut comp = TieredComputation::start(table, options.amount);
    comp.note(
        NoteCode::EconomicValue,
        format!(
            "Economic value of the contract: {}{}",
            format_native(options.amount),
            NATIVE_UNIT_LABEL
        ),
    );
    comp.apply_minimum_retainer(table.minimum_retainer);
    comp.apply_adjustment(options.adjustment_percent);

    comp.into_result(CaseCategory::ContractNegotiation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_value_note_comes_first() {
        let result = calculate_negotiation(
            FeeSchedule::standard(),
            &NegotiationOptions {
                amount: 5_000.0,
                adjustment_percent: 0.0,
            },
        );
        assert_eq!(result.retainer_fee, 430_000);
        assert_eq!(result.success_fee, 860_000);
        assert_eq!(result.notes[0].code, NoteCode::EconomicValue);
        assert_eq!(result.notes[0].text, "Economic value of the contract: 5,000万円");
    }

    #[test]
    fn test_small_contract_hits_floor() {
        let result = calculate_negotiation(
            FeeSchedule::standard(),
            &NegotiationOptions {
                amount: 500.0,
                adjustment_percent: 0.0,
            },
        );
        // 500 × 1% + 3 = 8, below the floor of 10
        assert_eq!(result.retainer_fee, 100_000);
        assert_eq!(result.success_fee, 160_000);
        assert!(result.has_note(NoteCode::MinimumRetainer));
    }
}
