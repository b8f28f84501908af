//! Tiered-formula evaluator
//!
//! Shared by litigation, promissory-instrument litigation, contract
//! negotiation, payment orders, and (through litigation) divorce and
//! preservation.
//!
//! # Pipeline
//!
//! A [`TieredComputation`] starts from `amount × rate + additive` and is
//! refined step by step. Callers apply only the steps their category uses,
//! always in this order:
//!
//! 1. negotiation discount
//! 2. continued-representation discount (retainer only)
//! 3. minimum-retainer floor
//! 4. case-specific adjustment
//! 5. expertise surcharge
//! 6. success-fee-only folding
//!
//! Every step updates the running native-unit figures and the formula
//! trails together. Conversion to yen happens once, in
//! [`TieredComputation::into_result`].

use tracing::trace;

use super::adjustments::{
    adjustment_factor, adjustment_note, expertise_factor, expertise_note, factor_suffix,
};
use crate::core::format::{format_native, format_rate_percent};
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{CalculationResult, CaseCategory, DerivationNote, FeeDetail, NoteCode};
use crate::schedule::TieredSchedule;

/// Human-readable formula, built from space-separated parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaTrail {
    parts: Vec<String>,
}

impl FormulaTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part, e.g. `"× 1/2"`
    pub fn push(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Parenthesize everything so far and append `suffix`
    ///
    /// `["500万円 × 5%", "+ 9万円"]` wrapped with `"× 2/3"` becomes
    /// `["(500万円 × 5% + 9万円) × 2/3"]`.
    pub fn wrap(&mut self, suffix: &str) {
        let inner = self.render();
        self.parts = vec![format!("({}) {}", inner, suffix)];
    }

    /// Discard the derivation so far in favour of a single statement
    pub fn replace(&mut self, text: impl Into<String>) {
        self.parts = vec![text.into()];
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn render(&self) -> String {
        self.parts.join(" ")
    }
}

/// Base formula `amount × rate% + additive`, the additive omitted when zero
pub fn rate_trail(amount: f64, rate: f64, additive: f64) -> FormulaTrail {
    let mut trail = FormulaTrail::new();
    trail.push(format!(
        "{}{} × {}%",
        format_native(amount),
        NATIVE_UNIT_LABEL,
        format_rate_percent(rate)
    ));
    if additive > 0.0 {
        trail.push(format!("+ {}{}", format_native(additive), NATIVE_UNIT_LABEL));
    }
    trail
}

/// Running state of one tiered calculation, in the native unit
#[derive(Debug, Clone)]
pub struct TieredComputation {
    pub amount: f64,
    pub tier: usize,
    pub retainer: f64,
    pub success: f64,
    pub retainer_trail: FormulaTrail,
    pub success_trail: FormulaTrail,
    pub notes: Vec<DerivationNote>,
}

impl TieredComputation {
    /// Evaluate the base formula for `amount` against one tiered table
    ///
    /// `amount` must be positive; callers handle the zero-result case.
    pub fn start(table: &TieredSchedule, amount: f64) -> Self {
        let figures = table.evaluate(amount);

        let retainer_trail = rate_trail(
            amount,
            figures.rates.retainer_rate,
            figures.retainer_additive,
        );
        let success_trail = rate_trail(
            amount,
            figures.rates.success_rate,
            figures.success_additive,
        );

        Self {
            amount,
            tier: figures.tier,
            retainer: figures.retainer,
            success: figures.success,
            retainer_trail,
            success_trail,
            notes: Vec::new(),
        }
    }

    pub fn note(&mut self, code: NoteCode, text: impl Into<String>) {
        self.notes.push(DerivationNote::new(code, text));
    }

    /// Mediation or settlement negotiation: both figures × `factor` (2/3)
    pub fn apply_negotiation_discount(&mut self, factor: f64) {
        self.retainer *= factor;
        self.success *= factor;
        self.retainer_trail.wrap("× 2/3");
        self.success_trail.wrap("× 2/3");
        self.note(
            NoteCode::NegotiationDiscount,
            "Mediation or settlement negotiation: 2/3 applied",
        );
    }

    /// Continued representation: retainer halved, success untouched
    pub fn halve_retainer(&mut self) {
        self.retainer /= 2.0;
        self.retainer_trail.push("× 1/2");
        self.note(
            NoteCode::ContinuedRepresentation,
            "Continued representation: retainer halved",
        );
    }

    /// Clamp the retainer up to `minimum`
    ///
    /// When the floor decides the figure, the retainer trail is replaced:
    /// the formula no longer explains the value. Returns whether it applied.
    pub fn apply_minimum_retainer(&mut self, minimum: f64) -> bool {
        if self.retainer >= minimum {
            return false;
        }

        trace!(computed = self.retainer, minimum, "minimum retainer applied");
        self.retainer = minimum;
        let text = format!(
            "Minimum retainer of {}{} applied",
            format_native(minimum),
            NATIVE_UNIT_LABEL
        );
        self.retainer_trail.replace(text.clone());
        self.note(NoteCode::MinimumRetainer, text);
        true
    }

    /// Case-specific increase or decrease; skipped for 0
    pub fn apply_adjustment(&mut self, percent: f64) {
        if let Some(factor) = adjustment_factor(percent) {
            self.retainer *= factor;
            self.success *= factor;
            let suffix = factor_suffix(percent);
            self.retainer_trail.push(suffix.clone());
            self.success_trail.push(suffix);
            self.notes.push(adjustment_note(percent));
        }
    }

    /// Expertise surcharge; skipped unless positive
    pub fn apply_expertise(&mut self, percent: f64) {
        if let Some(factor) = expertise_factor(percent) {
            self.retainer *= factor;
            self.success *= factor;
            let suffix = factor_suffix(percent);
            self.retainer_trail.push(suffix.clone());
            self.success_trail.push(suffix);
            self.notes.push(expertise_note(percent));
        }
    }

    /// Success-fee-only mode: the retainer moves into the success fee
    ///
    /// Any minimum-retainer text, trail and note alike, is discarded.
    pub fn fold_into_success(&mut self) {
        self.success += self.retainer;
        self.retainer = 0.0;
        self.notes.retain(|n| n.code != NoteCode::MinimumRetainer);
        self.success_trail.replace("Success fee + retainer equivalent");
        self.retainer_trail.replace("No retainer");
        self.note(NoteCode::SuccessFeeOnly, "No retainer: success fee only");
    }

    /// Convert to yen, rounding each figure exactly once
    pub fn into_result(self, category: CaseCategory) -> CalculationResult {
        CalculationResult {
            category,
            retainer_fee: to_minor_units(self.retainer),
            success_fee: to_minor_units(self.success),
            retainer_formula: self.retainer_trail.render(),
            success_formula: self.success_trail.render(),
            notes: self.notes,
            explanatory_note: None,
            detail: FeeDetail::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::FeeSchedule;

    #[test]
    fn test_formula_trail_wrap_and_replace() {
        let mut trail = FormulaTrail::new();
        trail.push("500万円 × 5%");
        trail.push("+ 9万円");
        trail.wrap("× 2/3");
        trail.push("× 1/2");
        assert_eq!(trail.render(), "(500万円 × 5% + 9万円) × 2/3 × 1/2");

        trail.replace("No retainer");
        assert_eq!(trail.render(), "No retainer");
    }

    #[test]
    fn test_start_omits_zero_additive() {
        let schedule = FeeSchedule::published();
        let comp = TieredComputation::start(&schedule.litigation, 200.0);
        assert_eq!(comp.tier, 0);
        assert_eq!(comp.retainer_trail.render(), "200万円 × 8%");
        assert_eq!(comp.success_trail.render(), "200万円 × 16%");
    }

    #[test]
    fn test_start_includes_additive() {
        let schedule = FeeSchedule::published();
        let comp = TieredComputation::start(&schedule.negotiation, 5_000.0);
        assert_eq!(comp.retainer_trail.render(), "5,000万円 × 0.5% + 18万円");
        assert_eq!(comp.success_trail.render(), "5,000万円 × 1% + 36万円");
    }

    #[test]
    fn test_minimum_not_applied_at_threshold() {
        let schedule = FeeSchedule::published();
        // 125 × 8% = 10, exactly the floor
        let mut comp = TieredComputation::start(&schedule.litigation, 125.0);
        assert!(!comp.apply_minimum_retainer(10.0));
        assert!(comp.notes.is_empty());
    }

    #[test]
    fn test_fold_discards_minimum_text() {
        let schedule = FeeSchedule::published();
        let mut comp = TieredComputation::start(&schedule.litigation, 100.0);
        assert!(comp.apply_minimum_retainer(10.0));
        comp.fold_into_success();

        assert_eq!(comp.retainer, 0.0);
        assert!((comp.success - 26.0).abs() < 1e-9);
        assert_eq!(comp.retainer_trail.render(), "No retainer");
    }
}
