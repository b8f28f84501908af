//! Percentage adjustments shared by tiered and flat-rate categories

use crate::core::format::format_signed_percent;
use crate::models::{DerivationNote, NoteCode};

/// Multiplier for a case-specific adjustment, `None` when it has no effect
///
/// Negative percentages are allowed; the usual range is ±30 but it is not
/// clamped.
pub fn adjustment_factor(percent: f64) -> Option<f64> {
    if percent != 0.0 && percent.is_finite() {
        Some(1.0 + percent / 100.0)
    } else {
        None
    }
}

/// Multiplier for the expertise surcharge, `None` unless positive
pub fn expertise_factor(percent: f64) -> Option<f64> {
    if percent > 0.0 && percent.is_finite() {
        Some(1.0 + percent / 100.0)
    } else {
        None
    }
}

/// Formula suffix such as `× (1+10%)` or `× (1-15%)`
pub fn factor_suffix(percent: f64) -> String {
    format!("× (1{}%)", format_signed_percent(percent))
}

pub fn adjustment_note(percent: f64) -> DerivationNote {
    DerivationNote::new(
        NoteCode::ComplexityAdjustment,
        format!("Case-specific adjustment: {}%", format_signed_percent(percent)),
    )
}

pub fn expertise_note(percent: f64) -> DerivationNote {
    DerivationNote::new(
        NoteCode::ExpertiseSurcharge,
        format!("Expertise surcharge: {}%", format_signed_percent(percent)),
    )
}
