//! Bankruptcy and insolvency fees
//!
//! Retainer only. The schedule sets no success fee figure for these
//! proceedings; the explanatory note states what any success fee would be
//! contingent on.

use super::adjustments::{expertise_factor, expertise_note};
use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    ApplicantType, CalculationResult, CaseCategory, DerivationNote, EntityScale, InsolvencyCase,
    InsolvencyOptions, NoteCode,
};
use crate::schedule::{FeeSchedule, InsolvencySchedule};

/// Retainer figure and case label for one subtype
fn lookup(
    table: &InsolvencySchedule,
    case: InsolvencyCase,
    applicant: ApplicantType,
    scale: EntityScale,
) -> (f64, String) {
    let applicant_label = |individual: &str, sole_proprietor: &str, corporation: &str| {
        match applicant {
            ApplicantType::Individual => individual.to_string(),
            ApplicantType::SoleProprietor => sole_proprietor.to_string(),
            ApplicantType::Corporation => format!("{}, {}", corporation, scale.label()),
        }
    };

    match case {
        InsolvencyCase::SelfBankruptcy => (
            table.self_bankruptcy.get(applicant, scale),
            format!(
                "Self-filed bankruptcy ({})",
                applicant_label("individual, non-business", "sole proprietor", "corporation")
            ),
        ),
        InsolvencyCase::CreditorBankruptcy => (
            table.creditor_bankruptcy,
            "Bankruptcy (other than self-filed)".to_string(),
        ),
        InsolvencyCase::CivilRehabilitation => (
            table.civil_rehabilitation.get(applicant, scale),
            format!(
                "Civil rehabilitation ({})",
                applicant_label(
                    "individual, small-scale rehabilitation",
                    "non-business",
                    "business"
                )
            ),
        ),
        InsolvencyCase::CompanyArrangement => {
            (table.company_arrangement, "Company arrangement".to_string())
        }
        InsolvencyCase::SpecialLiquidation => {
            (table.special_liquidation, "Special liquidation".to_string())
        }
        InsolvencyCase::CorporateReorganization => (
            table.corporate_reorganization,
            "Corporate reorganization".to_string(),
        ),
        InsolvencyCase::VoluntaryArrangement => (
            table.voluntary_arrangement.get(applicant, scale),
            format!(
                "Voluntary debt arrangement ({})",
                applicant_label("non-business", "business", "corporation")
            ),
        ),
    }
}

/// What the success fee is contingent on
fn success_condition(case: InsolvencyCase) -> &'static str {
    match case {
        InsolvencyCase::SelfBankruptcy => {
            "A success fee arises only when a discharge order is granted"
        }
        InsolvencyCase::CivilRehabilitation => {
            "A success fee arises only when the rehabilitation plan is confirmed. \
             Fees for ongoing supervision may be agreed separately."
        }
        InsolvencyCase::CorporateReorganization => {
            "A success fee arises only when the reorganization plan is confirmed"
        }
        InsolvencyCase::CreditorBankruptcy
        | InsolvencyCase::CompanyArrangement
        | InsolvencyCase::SpecialLiquidation
        | InsolvencyCase::VoluntaryArrangement => {
            "Any success fee is agreed separately according to the outcome"
        }
    }
}

/// Calculate bankruptcy and insolvency fees
///
/// # Example
/// ```
/// use fee_calculator_core_rs::calculator::calculate_insolvency;
/// use fee_calculator_core_rs::{FeeSchedule, InsolvencyOptions};
///
/// let result = calculate_insolvency(FeeSchedule::standard(), &InsolvencyOptions::default());
/// assert_eq!(result.retainer_fee, 200_000);
/// assert_eq!(result.success_fee, 0);
/// assert!(result.explanatory_note.is_some());
/// ```
pub fn calculate_insolvency(
    schedule: &FeeSchedule,
    options: &InsolvencyOptions,
) -> CalculationResult {
    let (base, label) = lookup(
        &schedule.insolvency,
        options.case_subtype,
        options.applicant_type,
        options.entity_scale,
    );

    let mut retainer = base;
    let mut notes = vec![
        DerivationNote::new(NoteCode::CaseType, label),
        DerivationNote::new(
            NoteCode::BaseFee,
            format!(
                "Base retainer: {}{} or more",
                format_native(base),
                NATIVE_UNIT_LABEL
            ),
        ),
    ];

    if let Some(factor) = expertise_factor(options.expertise_percent) {
        retainer *= factor;
        notes.push(expertise_note(options.expertise_percent));
    }

    CalculationResult {
        category: CaseCategory::Insolvency,
        retainer_fee: to_minor_units(retainer),
        notes,
        explanatory_note: Some(success_condition(options.case_subtype).to_string()),
        ..CalculationResult::zero(CaseCategory::Insolvency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(
        case_subtype: InsolvencyCase,
        applicant_type: ApplicantType,
        entity_scale: EntityScale,
    ) -> CalculationResult {
        calculate_insolvency(
            FeeSchedule::standard(),
            &InsolvencyOptions {
                case_subtype,
                applicant_type,
                entity_scale,
                expertise_percent: 0.0,
            },
        )
    }

    #[test]
    fn test_self_bankruptcy_individual() {
        let result = calc(
            InsolvencyCase::SelfBankruptcy,
            ApplicantType::Individual,
            EntityScale::Small,
        );
        assert_eq!(result.retainer_fee, 200_000);
        assert_eq!(result.success_fee, 0);
        assert_eq!(
            result.notes[0].text,
            "Self-filed bankruptcy (individual, non-business)"
        );
        assert_eq!(result.notes[1].text, "Base retainer: 20万円 or more");
        assert!(result
            .explanatory_note
            .as_deref()
            .is_some_and(|n| n.contains("discharge")));
    }

    #[test]
    fn test_corporate_scale_lookup() {
        let result = calc(
            InsolvencyCase::CivilRehabilitation,
            ApplicantType::Corporation,
            EntityScale::Large,
        );
        assert_eq!(result.retainer_fee, 2_000_000);
        assert_eq!(
            result.notes[0].text,
            "Civil rehabilitation (business, large)"
        );
    }

    #[test]
    fn test_applicant_ignored_for_fixed_subtypes() {
        let result = calc(
            InsolvencyCase::CorporateReorganization,
            ApplicantType::Individual,
            EntityScale::Small,
        );
        assert_eq!(result.retainer_fee, 2_000_000);
    }

    #[test]
    fn test_expertise_applies_to_retainer() {
        let result = calculate_insolvency(
            FeeSchedule::standard(),
            &InsolvencyOptions {
                case_subtype: InsolvencyCase::CreditorBankruptcy,
                expertise_percent: 10.0,
                ..Default::default()
            },
        );
        assert_eq!(result.retainer_fee, 550_000);
        assert_eq!(result.success_fee, 0);
        assert!(result.has_note(NoteCode::ExpertiseSurcharge));
    }
}
