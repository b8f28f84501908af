//! Divorce fees
//!
//! A flat figure picked from the range for the case type, plus litigation
//! fees on any property division, alimony or consolation money at stake.

use super::adjustments::{expertise_factor, expertise_note};
use super::litigation::litigation_computation;
use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    CalculationResult, CaseCategory, DerivationNote, DivorceCaseType, DivorceOptions,
    LitigationOptions, NoteCode,
};
use crate::schedule::FeeSchedule;

fn case_type_label(case_type: DivorceCaseType) -> &'static str {
    match case_type {
        DivorceCaseType::Negotiation => "negotiation or mediation",
        DivorceCaseType::Litigation => "litigation",
    }
}

/// Calculate divorce fees
pub fn calculate_divorce(schedule: &FeeSchedule, options: &DivorceOptions) -> CalculationResult {
    let range = match options.case_type {
        DivorceCaseType::Negotiation => schedule.divorce.negotiation,
        DivorceCaseType::Litigation => schedule.divorce.litigation,
    };
    let base = range.select(options.complexity);

    let mut retainer = base;
    let mut success = base;
    let mut notes = vec![
        DerivationNote::new(
            NoteCode::CaseType,
            format!("Case type: {}", case_type_label(options.case_type)),
        ),
        DerivationNote::new(
            NoteCode::BaseFee,
            format!("Base fee: {}{}", format_native(base), NATIVE_UNIT_LABEL),
        ),
    ];

    if options.is_continued_representation {
        retainer /= 2.0;
        notes.push(DerivationNote::new(
            NoteCode::ContinuedRepresentation,
            "Continued representation: retainer halved",
        ));
    }

    let property = LitigationOptions {
        amount: options.property_value,
        is_negotiation_settlement: options.case_type != DivorceCaseType::Litigation,
        ..LitigationOptions::default()
    };
    if let Some(comp) = litigation_computation(schedule, &property) {
        retainer += comp.retainer;
        success += comp.success;
        notes.push(DerivationNote::new(
            NoteCode::PropertyDivision,
            format!(
                "Property division, alimony or consolation money: {}{} added as economic value",
                format_native(options.property_value),
                NATIVE_UNIT_LABEL
            ),
        ));
    }

    if let Some(factor) = expertise_factor(options.expertise_percent) {
        retainer *= factor;
        success *= factor;
        notes.push(expertise_note(options.expertise_percent));
    }

    CalculationResult {
        category: CaseCategory::Divorce,
        retainer_fee: to_minor_units(retainer),
        success_fee: to_minor_units(success),
        notes,
        ..CalculationResult::zero(CaseCategory::Divorce)
    }
}
