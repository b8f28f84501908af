//! Domain models for the fee calculator

pub mod options;
pub mod result;
pub mod selectors;

// Re-exports
pub use options::{
    AdvisoryOptions, CalculationRequest, CaseCategory, CriminalOptions, DailyRateOptions,
    DivorceOptions, InsolvencyOptions, LitigationOptions, NegotiationOptions, PaymentOrderOptions,
    PreservationOptions, DEFAULT_ADVISORY_MONTHS, DEFAULT_DAILY_DAYS,
};
pub use result::{CalculationResult, DerivationNote, FeeDetail, NoteCode};
pub use selectors::{
    count_or_default, normalize_count, AdvisoryPlan, ApplicantType, CriminalComplexity,
    CriminalStage, DailyDuration, Difficulty, DivorceCaseType, EntityScale, InsolvencyCase,
    ParseSelectorError, PreservationProcedure,
};
