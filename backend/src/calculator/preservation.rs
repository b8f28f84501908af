//! Preservation order fees
//!
//! Provisional attachment and provisional injunction applications are
//! billed as a fraction of the main case's litigation fees.

use super::litigation::litigation_computation;
use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    CalculationResult, CaseCategory, DerivationNote, FeeDetail, LitigationOptions, NoteCode,
    PreservationOptions, PreservationProcedure,
};
use crate::schedule::FeeSchedule;

const SUCCESS_CONDITION: &str = "A success fee may be charged when the matter is serious or \
     complex, or when the objective of the main case is achieved";

/// Calculate preservation order fees
pub fn calculate_preservation(
    schedule: &FeeSchedule,
    options: &PreservationOptions,
) -> CalculationResult {
    let Some(main_case) =
        litigation_computation(schedule, &LitigationOptions::for_amount(options.amount))
    else {
        let mut result = CalculationResult::zero(CaseCategory::Preservation);
        result.detail = FeeDetail::Preservation {
            main_case_retainer: 0,
        };
        return result;
    };

    let ratios = &schedule.preservation;
    let mut notes = vec![DerivationNote::new(
        NoteCode::EconomicValue,
        format!(
            "Economic value of the main case: {}{}",
            format_native(options.amount),
            NATIVE_UNIT_LABEL
        ),
    )];

    let (retainer, success) = match options.procedure {
        PreservationProcedure::Standard => {
            notes.push(DerivationNote::new(
                NoteCode::Procedure,
                "Standard procedure: 1/2 of the main case retainer",
            ));
            (
                main_case.retainer * ratios.standard_retainer_ratio,
                main_case.success * ratios.standard_success_ratio,
            )
        }
        PreservationProcedure::WithHearing => {
            notes.push(DerivationNote::new(
                NoteCode::Procedure,
                "With hearing or oral argument: 2/3 of the main case retainer",
            ));
            (
                main_case.retainer * ratios.hearing_retainer_ratio,
                main_case.success * ratios.hearing_success_ratio,
            )
        }
    };

    if options.with_main_case {
        notes.push(DerivationNote::new(
            NoteCode::MainCase,
            "Taken on together with the main case (billable separately)",
        ));
    }
    notes.push(DerivationNote::new(NoteCode::SuccessCondition, SUCCESS_CONDITION));

    CalculationResult {
        category: CaseCategory::Preservation,
        retainer_fee: to_minor_units(retainer),
        success_fee: to_minor_units(success),
        retainer_formula: String::new(),
        success_formula: String::new(),
        notes,
        explanatory_note: Some(SUCCESS_CONDITION.to_string()),
        detail: FeeDetail::Preservation {
            main_case_retainer: to_minor_units(main_case.retainer),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(
        amount: f64,
        procedure: PreservationProcedure,
        with_main_case: bool,
    ) -> CalculationResult {
        calculate_preservation(
            FeeSchedule::standard(),
            &PreservationOptions {
                amount,
                procedure,
                with_main_case,
            },
        )
    }

    #[test]
    fn test_standard_procedure() {
        let result = calc(500.0, PreservationProcedure::Standard, false);
        assert_eq!(result.retainer_fee, 170_000);
        assert_eq!(result.success_fee, 170_000);
        assert_eq!(
            result.detail,
            FeeDetail::Preservation {
                main_case_retainer: 340_000
            }
        );
        assert!(!result.has_note(NoteCode::MainCase));
    }

    #[test]
    fn test_hearing_procedure() {
        let result = calc(500.0, PreservationProcedure::WithHearing, true);
        assert_eq!(result.retainer_fee, 226_667);
        assert_eq!(result.success_fee, 226_667);
        assert!(result.has_note(NoteCode::MainCase));
    }

    #[test]
    fn test_main_case_floor_carries_through() {
        // Main case retainer 100 × 8% = 8 is floored at 10 before halving
        let result = calc(100.0, PreservationProcedure::Standard, false);
        assert_eq!(result.retainer_fee, 50_000);
        assert_eq!(result.success_fee, 40_000);
    }

    #[test]
    fn test_zero_amount() {
        let result = calc(0.0, PreservationProcedure::Standard, true);
        assert_eq!(result.retainer_fee, 0);
        assert!(result.notes.is_empty());
        assert!(result.explanatory_note.is_none());
    }
}
