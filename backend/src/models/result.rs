//! Calculation results and derivation notes
//!
//! CRITICAL: All money values are i64 (yen), never negative.

use serde::{Deserialize, Serialize};

use super::options::CaseCategory;

/// Why a derivation note was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteCode {
    /// The economic value the tiers were applied to
    EconomicValue,
    /// Mediation or settlement negotiation discount (2/3)
    NegotiationDiscount,
    /// Continued representation halved the retainer
    ContinuedRepresentation,
    /// The minimum retainer replaced the formula result
    MinimumRetainer,
    /// Case-specific increase or decrease
    ComplexityAdjustment,
    /// Specialist subject-matter surcharge
    ExpertiseSurcharge,
    /// Retainer folded into the success fee
    SuccessFeeOnly,
    /// Success fee only payable on actual recovery
    RecoveryCondition,
    /// Additional retainer if the matter moves into litigation
    TransitionSurcharge,
    /// Which case type or subtype was looked up
    CaseType,
    /// The flat base figure taken from the schedule
    BaseFee,
    /// Property division or alimony added through the litigation formula
    PropertyDivision,
    /// Preservation procedure ratio applied
    Procedure,
    /// Taken on together with the main case
    MainCase,
    /// Success fee conditions
    SuccessCondition,
    /// Criminal procedural stage
    ProceduralStage,
    /// Advisory plan or daily-rate duration looked up
    Plan,
    /// Monthly advisory fee or per-diem figure
    UnitRate,
    /// Number of months or days billed
    Period,
}

impl NoteCode {
    /// Serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteCode::EconomicValue => "economic_value",
            NoteCode::NegotiationDiscount => "negotiation_discount",
            NoteCode::ContinuedRepresentation => "continued_representation",
            NoteCode::MinimumRetainer => "minimum_retainer",
            NoteCode::ComplexityAdjustment => "complexity_adjustment",
            NoteCode::ExpertiseSurcharge => "expertise_surcharge",
            NoteCode::SuccessFeeOnly => "success_fee_only",
            NoteCode::RecoveryCondition => "recovery_condition",
            NoteCode::TransitionSurcharge => "transition_surcharge",
            NoteCode::CaseType => "case_type",
            NoteCode::BaseFee => "base_fee",
            NoteCode::PropertyDivision => "property_division",
            NoteCode::Procedure => "procedure",
            NoteCode::MainCase => "main_case",
            NoteCode::SuccessCondition => "success_condition",
            NoteCode::ProceduralStage => "procedural_stage",
            NoteCode::Plan => "plan",
            NoteCode::UnitRate => "unit_rate",
            NoteCode::Period => "period",
        }
    }
}

/// One step of the human-readable derivation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationNote {
    pub code: NoteCode,
    pub text: String,
}

impl DerivationNote {
    pub fn new(code: NoteCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for DerivationNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Category-specific figures beyond the retainer and success fee
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeeDetail {
    /// Retainer and success fee only
    #[default]
    Standard,
    PaymentOrder {
        /// Extra retainer owed if the case moves into litigation
        transition_surcharge: Option<i64>,
    },
    Preservation {
        /// Retainer of the main case the ratios were applied to
        main_case_retainer: i64,
    },
    Advisory {
        monthly_fee: i64,
        total_fee: i64,
        months: u32,
    },
    Daily {
        per_day: i64,
        total: i64,
        days: u32,
    },
}

/// Result of one fee calculation
///
/// Replaced wholesale on every recalculation; holds no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub category: CaseCategory,

    /// Retainer in yen
    pub retainer_fee: i64,

    /// Success fee in yen
    pub success_fee: i64,

    /// How the retainer was derived; empty when no formula applies
    pub retainer_formula: String,

    /// How the success fee was derived; empty when no formula applies
    pub success_formula: String,

    /// Ordered derivation trail
    pub notes: Vec<DerivationNote>,

    /// Conditions under which the success fee arises
    pub explanatory_note: Option<String>,

    pub detail: FeeDetail,
}

impl CalculationResult {
    /// All-zero result, used for non-positive economic values
    pub fn zero(category: CaseCategory) -> Self {
        Self {
            category,
            retainer_fee: 0,
            success_fee: 0,
            retainer_formula: String::new(),
            success_formula: String::new(),
            notes: Vec::new(),
            explanatory_note: None,
            detail: FeeDetail::Standard,
        }
    }

    /// Whether a note with the given code was recorded
    pub fn has_note(&self, code: NoteCode) -> bool {
        self.notes.iter().any(|n| n.code == code)
    }

    /// Render-ready derivation trail
    pub fn note_texts(&self) -> Vec<&str> {
        self.notes.iter().map(|n| n.text.as_str()).collect()
    }

    /// Transition surcharge for payment orders, 0 for every other category
    pub fn transition_surcharge(&self) -> i64 {
        match self.detail {
            FeeDetail::PaymentOrder {
                transition_surcharge: Some(amount),
            } => amount,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_code_name_matches_serde() {
        for code in [
            NoteCode::EconomicValue,
            NoteCode::SuccessFeeOnly,
            NoteCode::UnitRate,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_detail_serializes_with_kind_tag() {
        let detail = FeeDetail::Daily {
            per_day: 75_000,
            total: 225_000,
            days: 3,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "daily");
        assert_eq!(json["total"], 225_000);
    }

    #[test]
    fn test_transition_surcharge_defaults_to_zero() {
        let mut result = CalculationResult::zero(CaseCategory::PaymentOrder);
        assert_eq!(result.transition_surcharge(), 0);
        result.detail = FeeDetail::PaymentOrder {
            transition_surcharge: Some(30_000),
        };
        assert_eq!(result.transition_surcharge(), 30_000);
    }
}
