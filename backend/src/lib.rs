//! Fee Calculator Core - Rust Engine
//!
//! Attorney fee calculation under the former JFBA (Japan Federation of Bar
//! Associations) fee standard.
//!
//! # Architecture
//!
//! - **core**: Monetary units, rounding, tier lookup, number formatting
//! - **schedule**: The published fee table and its self-documentation
//! - **models**: Request options, selectors, results and derivation notes
//! - **calculator**: One pure function per case category, plus a dispatcher
//! - **estimate**: Tax-inclusive summaries and estimate documents
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (yen) and never negative
//! 2. Each figure is rounded to yen exactly once
//! 3. The fee schedule is immutable and shared by reference
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod calculator;
pub mod core;
pub mod estimate;
pub mod models;
pub mod schedule;

// Re-exports for convenience
pub use calculator::{calculate, FeeCalculator};
pub use estimate::{EstimateDocument, EstimateSettings, ResultSummary};
pub use models::{
    AdvisoryOptions, CalculationRequest, CalculationResult, CaseCategory, CriminalOptions,
    DailyRateOptions, DerivationNote, DivorceOptions, FeeDetail, InsolvencyOptions,
    LitigationOptions, NegotiationOptions, NoteCode, ParseSelectorError, PaymentOrderOptions,
    PreservationOptions,
};
pub use schedule::{get_fee_schedule_doc, FeeSchedule};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn fee_calculator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::calculate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::calculate_json, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::get_fee_schedule_doc, m)?)?;
    Ok(())
}
