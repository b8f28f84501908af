//! Core arithmetic shared by every fee category
//!
//! - **units**: native unit to yen conversion and rounding
//! - **tiers**: value tier selection
//! - **format**: number and currency formatting

pub mod format;
pub mod tiers;
pub mod units;

// Re-exports
pub use format::{format_native, format_rate_percent, format_signed_percent, format_yen};
pub use tiers::{tier_index, TIER_COUNT, TIER_UPPER_BOUNDS};
pub use units::{
    is_chargeable, round_minor, to_minor_units, with_tax, MAX_FEE_YEN, NATIVE_UNIT_LABEL,
};
