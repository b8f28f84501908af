//! Calculator Module
//!
//! One pure function per case category, plus a dispatcher over
//! [`CalculationRequest`].
//!
//! - Tiered categories (litigation, contract negotiation, payment orders)
//!   run the shared pipeline in [`tiered`]
//! - Flat-rate categories pick figures from ranges or lookup tables
//! - Divorce and preservation delegate to the litigation pipeline in the
//!   native unit and round once on their own totals
//!
//! # Invariants
//!
//! 1. **Non-negative**: every fee amount is `>= 0`
//! 2. **Single rounding**: each figure is rounded to yen exactly once
//! 3. **Total functions**: non-positive or NaN amounts give a zero result,
//!    never an error
//!
//! # Example
//!
//! ```rust
//! use fee_calculator_core_rs::calculator::FeeCalculator;
//! use fee_calculator_core_rs::models::{CalculationRequest, LitigationOptions};
//! use fee_calculator_core_rs::FeeSchedule;
//!
//! let calculator = FeeCalculator::new(FeeSchedule::standard());
//! let result = calculator.calculate(&CalculationRequest::Litigation(LitigationOptions {
//!     amount: 500.0,
//!     is_continued_representation: true,
//!     ..Default::default()
//! }));
//! assert_eq!(result.retainer_fee, 170_000);
//! assert_eq!(result.success_fee, 680_000);
//! ```

pub mod adjustments;
pub mod advisory;
pub mod criminal;
pub mod daily;
pub mod divorce;
pub mod insolvency;
pub mod litigation;
pub mod negotiation;
pub mod payment_order;
pub mod preservation;
pub mod tiered;

use tracing::debug;

use crate::models::{CalculationRequest, CalculationResult};
use crate::schedule::FeeSchedule;

// Re-export public API
pub use advisory::calculate_advisory;
pub use criminal::calculate_criminal;
pub use daily::calculate_daily;
pub use divorce::calculate_divorce;
pub use insolvency::calculate_insolvency;
pub use litigation::calculate_litigation;
pub use negotiation::calculate_negotiation;
pub use payment_order::calculate_payment_order;
pub use preservation::calculate_preservation;
pub use tiered::{FormulaTrail, TieredComputation};

/// Calculate fees for any category
pub fn calculate(schedule: &FeeSchedule, request: &CalculationRequest) -> CalculationResult {
    let result = match request {
        CalculationRequest::Litigation(options) => calculate_litigation(schedule, options),
        CalculationRequest::ContractNegotiation(options) => {
            calculate_negotiation(schedule, options)
        }
        CalculationRequest::PaymentOrder(options) => calculate_payment_order(schedule, options),
        CalculationRequest::Divorce(options) => calculate_divorce(schedule, options),
        CalculationRequest::Insolvency(options) => calculate_insolvency(schedule, options),
        CalculationRequest::Preservation(options) => calculate_preservation(schedule, options),
        CalculationRequest::Criminal(options) => calculate_criminal(schedule, options),
        CalculationRequest::AdvisoryRetainer(options) => calculate_advisory(schedule, options),
        CalculationRequest::DailyRate(options) => calculate_daily(schedule, options),
    };

    debug!(
        category = result.category.as_str(),
        retainer = result.retainer_fee,
        success = result.success_fee,
        notes = result.notes.len(),
        "fee calculated"
    );
    result
}

/// A fee schedule bound to a calculator value
///
/// Holds only a shared reference; cheap to copy and safe to share across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator<'a> {
    schedule: &'a FeeSchedule,
}

impl<'a> FeeCalculator<'a> {
    pub fn new(schedule: &'a FeeSchedule) -> Self {
        Self { schedule }
    }

    /// Calculator over the published schedule
    pub fn standard() -> FeeCalculator<'static> {
        FeeCalculator::new(FeeSchedule::standard())
    }

    pub fn schedule(&self) -> &'a FeeSchedule {
        self.schedule
    }

    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        calculate(self.schedule, request)
    }
}

impl Default for FeeCalculator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
