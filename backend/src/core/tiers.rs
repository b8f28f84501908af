//! Value tier selection
//!
//! Every tiered category (litigation, promissory-instrument litigation,
//! contract negotiation, payment order) shares the litigation schedule's
//! tier boundaries even though each category has its own rates.

/// Number of value tiers in the schedule
pub const TIER_COUNT: usize = 4;

/// Inclusive upper bounds of the first three tiers (native unit)
///
/// The fourth tier is unbounded.
pub const TIER_UPPER_BOUNDS: [f64; TIER_COUNT - 1] = [300.0, 3_000.0, 30_000.0];

/// Select the tier for an economic value
///
/// Returns the index of the first tier whose upper bound is >= `amount`.
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::tiers::tier_index;
///
/// assert_eq!(tier_index(300.0), 0);
/// assert_eq!(tier_index(300.5), 1);
/// assert_eq!(tier_index(30_000.0), 2);
/// assert_eq!(tier_index(30_001.0), 3);
/// ```
pub fn tier_index(amount: f64) -> usize {
    TIER_UPPER_BOUNDS
        .iter()
        .position(|&bound| amount <= bound)
        .unwrap_or(TIER_COUNT - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(tier_index(1.0), 0);
        assert_eq!(tier_index(300.0), 0);
        assert_eq!(tier_index(301.0), 1);
        assert_eq!(tier_index(3_000.0), 1);
        assert_eq!(tier_index(3_000.01), 2);
        assert_eq!(tier_index(30_000.0), 2);
        assert_eq!(tier_index(1_000_000.0), 3);
    }
}
