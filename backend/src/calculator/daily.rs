//! Daily rate (per diem) fees

use crate::core::format::format_native;
use crate::core::units::{to_minor_units, NATIVE_UNIT_LABEL};
use crate::models::{
    CalculationResult, CaseCategory, DailyDuration, DailyRateOptions, DerivationNote, FeeDetail,
    NoteCode,
};
use crate::schedule::FeeSchedule;

/// Calculate the per-diem and total for a number of days
///
/// Per-diem and total are rounded independently.
pub fn calculate_daily(schedule: &FeeSchedule, options: &DailyRateOptions) -> CalculationResult {
    let (range, label) = match options.duration {
        DailyDuration::HalfDay => (
            schedule.daily.half_day,
            "half day (2 to 4 hours round trip)",
        ),
        DailyDuration::FullDay => (
            schedule.daily.full_day,
            "full day (over 4 hours round trip)",
        ),
    };
    let per_day = range.select(options.rate);
    let total = per_day * f64::from(options.days);

    let notes = vec![
        DerivationNote::new(NoteCode::Plan, format!("Time committed: {}", label)),
        DerivationNote::new(
            NoteCode::UnitRate,
            format!("Per day: {}{}", format_native(per_day), NATIVE_UNIT_LABEL),
        ),
        DerivationNote::new(NoteCode::Period, format!("Days: {}", options.days)),
    ];

    CalculationResult {
        notes,
        detail: FeeDetail::Daily {
            per_day: to_minor_units(per_day),
            total: to_minor_units(total),
            days: options.days,
        },
        ..CalculationResult::zero(CaseCategory::DailyRate)
    }
}
