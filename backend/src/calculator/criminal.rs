//! Criminal defense fees

use super::adjustments::{expertise_factor, expertise_note};
use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    CalculationResult, CaseCategory, CriminalComplexity, CriminalOptions, CriminalStage,
    DerivationNote, NoteCode,
};
use crate::schedule::FeeSchedule;

fn stage_label(stage: CriminalStage) -> &'static str {
    match stage {
        CriminalStage::PreIndictment => "before indictment",
        CriminalStage::PostIndictment => "after indictment (first instance)",
        CriminalStage::Appeal => "appeal",
    }
}

fn success_condition(stage: CriminalStage) -> &'static str {
    match stage {
        CriminalStage::PreIndictment => {
            "A success fee arises on non-prosecution or a summary order"
        }
        CriminalStage::PostIndictment | CriminalStage::Appeal => {
            "A success fee arises according to the outcome: acquittal, suspended \
             sentence or reduced sentence"
        }
    }
}

/// Calculate criminal defense fees
pub fn calculate_criminal(schedule: &FeeSchedule, options: &CriminalOptions) -> CalculationResult {
    let (range, complexity_label) = match options.complexity {
        CriminalComplexity::Simple => (schedule.criminal.simple, "simple and clear"),
        CriminalComplexity::Complex => (schedule.criminal.complex, "complex or serious"),
    };
    let base = range.select(options.difficulty);

    let mut retainer = base;
    let mut success = base;
    let mut notes = vec![
        DerivationNote::new(
            NoteCode::ProceduralStage,
            format!("Stage: {}", stage_label(options.stage)),
        ),
        DerivationNote::new(NoteCode::CaseType, format!("Case: {}", complexity_label)),
        DerivationNote::new(
            NoteCode::BaseFee,
            format!("Base fee: {}{}", format_native(base), NATIVE_UNIT_LABEL),
        ),
    ];

    // Only simple cases get the continued-representation discount
    if options.is_continued_representation && options.complexity == CriminalComplexity::Simple {
        retainer /= 2.0;
        notes.push(DerivationNote::new(
            NoteCode::ContinuedRepresentation,
            "Continued representation (simple case): retainer halved",
        ));
    }

    if let Some(factor) = expertise_factor(options.expertise_percent) {
        retainer *= factor;
        success *= factor;
        notes.push(expertise_note(options.expertise_percent));
    }

    CalculationResult {
        category: CaseCategory::Criminal,
        retainer_fee: to_minor_units(retainer),
        success_fee: to_minor_units(success),
        notes,
        explanatory_note: Some(success_condition(options.stage).to_string()),
        ..CalculationResult::zero(CaseCategory::Criminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn calc(options: CriminalOptions) -> CalculationResult {
        calculate_criminal(FeeSchedule::standard(), &options)
    }

    #[test]
    fn test_simple_midpoint() {
        let result = calc(CriminalOptions::default());
        assert_eq!(result.retainer_fee, 350_000);
        assert_eq!(result.success_fee, 350_000);
        assert_eq!(result.notes[0].text, "Stage: after indictment (first instance)");
    }

    #[test]
    fn test_complex_high() {
        let result = calc(CriminalOptions {
            complexity: CriminalComplexity::Complex,
            difficulty: Some(Difficulty::High),
            ..Default::default()
        });
        assert_eq!(result.retainer_fee, 1_000_000);
    }

    #[test]
    fn test_continued_discount_only_for_simple_cases() {
        let simple = calc(CriminalOptions {
            is_continued_representation: true,
            ..Default::default()
        });
        assert_eq!(simple.retainer_fee, 175_000);
        assert_eq!(simple.success_fee, 350_000);

        let complex = calc(CriminalOptions {
            complexity: CriminalComplexity::Complex,
            is_continued_representation: true,
            ..Default::default()
        });
        assert_eq!(complex.retainer_fee, 750_000);
        assert!(!complex.has_note(NoteCode::ContinuedRepresentation));
    }

    #[test]
    fn test_expertise_and_stage_note() {
        let result = calc(CriminalOptions {
            stage: CriminalStage::PreIndictment,
            complexity: CriminalComplexity::Complex,
            difficulty: Some(Difficulty::Low),
            expertise_percent: 20.0,
            ..Default::default()
        });
        assert_eq!(result.retainer_fee, 600_000);
        assert_eq!(result.success_fee, 600_000);
        assert!(result
            .explanatory_note
            .as_deref()
            .is_some_and(|n| n.contains("non-prosecution")));
    }
}
