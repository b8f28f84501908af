//! Estimate Module
//!
//! Presentation of calculation results: labelled summary lines with
//! tax-inclusive figures, and the client-facing estimate document.
//!
//! All tax-inclusive figures are `round(amount × (1 + tax_rate))`, rounded
//! once per figure.

pub mod document;
pub mod summary;

// Re-export public API
pub use document::{
    estimate_file_name, estimate_rows, EstimateDocument, EstimateRow, EstimateSettings,
    DEFAULT_VALIDITY_DAYS,
};
pub use summary::{ResultSummary, SummaryLine, SUMMARY_CAVEAT, SUMMARY_HEADER};
