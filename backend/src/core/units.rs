//! Monetary units and rounding
//!
//! The fee schedule is published in its own native unit (10,000 JPY, "万円").
//! Every intermediate figure stays in the native unit as `f64`; results leave
//! the calculator as `i64` yen.
//!
//! CRITICAL: conversion to yen happens exactly once per figure, after all
//! multiplicative adjustments, and never yields a negative amount.

use tracing::warn;

/// Number of minor currency units (yen) in one native schedule unit
pub const MINOR_UNITS_PER_NATIVE: f64 = 10_000.0;

/// Display suffix for figures expressed in the native unit
pub const NATIVE_UNIT_LABEL: &str = "万円";

/// Ceiling for any single yen figure (one quadrillion yen)
///
/// Far above any real fee, and low enough that sums of a handful of figures
/// stay within `i64`.
pub const MAX_FEE_YEN: i64 = 1_000_000_000_000_000;

/// Round a figure already expressed in yen to a whole yen
///
/// Ties round half away from zero. Non-finite and negative inputs
/// collapse to 0 so that no fee can ever leave the crate below zero.
/// Figures above [`MAX_FEE_YEN`] are capped.
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::units::round_minor;
///
/// assert_eq!(round_minor(2.5), 3);
/// assert_eq!(round_minor(374_000.4), 374_000);
/// assert_eq!(round_minor(-10.0), 0);
/// ```
pub fn round_minor(yen: f64) -> i64 {
    let rounded = yen.round();
    if !(rounded.is_finite() && rounded > 0.0) {
        return 0;
    }
    if rounded > MAX_FEE_YEN as f64 {
        warn!(yen, cap = MAX_FEE_YEN, "fee figure capped");
        return MAX_FEE_YEN;
    }
    rounded as i64
}

/// Convert a native-unit figure to whole yen
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::units::to_minor_units;
///
/// assert_eq!(to_minor_units(34.0), 340_000);
/// assert_eq!(to_minor_units(7.5), 75_000);
/// ```
pub fn to_minor_units(native: f64) -> i64 {
    round_minor(native * MINOR_UNITS_PER_NATIVE)
}

/// Apply a tax rate (fraction) to a yen amount, rounding once
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::units::with_tax;
///
/// assert_eq!(with_tax(340_000, 0.10), 374_000);
/// assert_eq!(with_tax(340_000, 0.0), 340_000);
/// ```
pub fn with_tax(amount: i64, tax_rate: f64) -> i64 {
    round_minor(amount as f64 * (1.0 + tax_rate))
}

/// True when an economic value should produce a fee at all
///
/// NaN, zero and negative values are the defined zero-result case.
pub fn is_chargeable(amount: f64) -> bool {
    amount > 0.0 && amount.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_minor_half_away_from_zero() {
        assert_eq!(round_minor(0.5), 1);
        assert_eq!(round_minor(1.5), 2);
        assert_eq!(round_minor(226_666.5), 226_667);
        assert_eq!(round_minor(226_666.49), 226_666);
    }

    #[test]
    fn test_round_minor_never_negative() {
        assert_eq!(round_minor(-0.4), 0);
        assert_eq!(round_minor(-1_000.0), 0);
        assert_eq!(round_minor(f64::NAN), 0);
        assert_eq!(round_minor(f64::NEG_INFINITY), 0);
        assert_eq!(round_minor(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_minor_caps_huge_figures() {
        assert_eq!(round_minor(1e30), MAX_FEE_YEN);
        assert_eq!(to_minor_units(1e17), MAX_FEE_YEN);
        assert_eq!(with_tax(MAX_FEE_YEN, 0.10), MAX_FEE_YEN);
        assert_eq!(round_minor(MAX_FEE_YEN as f64), MAX_FEE_YEN);
    }

    #[test]
    fn test_to_minor_units_fractional_native() {
        // 34 * 2/3 = 22.666... -> 226,667 yen
        assert_eq!(to_minor_units(34.0 * (2.0 / 3.0)), 226_667);
        assert_eq!(to_minor_units(0.5), 5_000);
        assert_eq!(to_minor_units(0.0), 0);
    }

    #[test]
    fn test_with_tax_rounds_once() {
        assert_eq!(with_tax(680_000, 0.1), 748_000);
        assert_eq!(with_tax(226_667, 0.1), 249_334);
        assert_eq!(with_tax(5_000, 0.08), 5_400);
    }

    #[test]
    fn test_is_chargeable() {
        assert!(is_chargeable(0.01));
        assert!(!is_chargeable(0.0));
        assert!(!is_chargeable(-5.0));
        assert!(!is_chargeable(f64::NAN));
        assert!(!is_chargeable(f64::INFINITY));
    }
}
