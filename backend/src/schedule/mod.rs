//! Fee Schedule and Schema Documentation
//!
//! This module provides:
//! - The immutable published schedule (`FeeSchedule`)
//! - Self-documenting descriptions of every case category (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Every rate, additive constant, floor and range the calculator reads lives
//! in `table.rs`.

pub mod schema_docs;
pub mod table;

// Re-exports
pub use schema_docs::{
    get_fee_schedule_doc, FeeCategoryDoc, FeeExample, FeeKind, FeeScheduleDoc,
    FeeScheduleDocumented,
};
pub use table::{
    AdvisorySchedule, ApplicantAmounts, CriminalSchedule, DailySchedule, DivorceSchedule,
    FeeRange, FeeSchedule, InsolvencySchedule, PreservationSchedule, ScaledAmounts, TierFigures,
    TierRates, TieredSchedule,
};
