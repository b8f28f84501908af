//! Fee Schedule Table
//!
//! The published fee standard as an immutable lookup structure.
//! All figures are in the native unit (10,000 JPY); rates are fractions.
//!
//! The table is built once per process (see [`FeeSchedule::standard`]) and
//! handed to every calculation by reference. It is never mutated and never
//! read from user input.

use std::sync::OnceLock;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::core::tiers::{tier_index, TIER_COUNT};
use crate::models::selectors::{ApplicantType, Difficulty, EntityScale};

/// Retainer and success rates for one value tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRates {
    pub retainer_rate: f64,
    pub success_rate: f64,
}

impl TierRates {
    pub const fn new(retainer_rate: f64, success_rate: f64) -> Self {
        Self {
            retainer_rate,
            success_rate,
        }
    }
}

/// One tiered category: rates, additive constants and the minimum retainer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredSchedule {
    /// Per-tier rates, indexed by [`tier_index`]
    pub rates: [TierRates; TIER_COUNT],

    /// Per-tier retainer additive constants
    ///
    /// Chosen so the formula is continuous across tier boundaries.
    pub retainer_additive: [f64; TIER_COUNT],

    /// Per-tier success additive constants
    pub success_additive: [f64; TIER_COUNT],

    /// Retainer floor
    pub minimum_retainer: f64,
}

/// Base figures for one tier, before any refinement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierFigures {
    pub tier: usize,
    pub rates: TierRates,
    pub retainer_additive: f64,
    pub success_additive: f64,
    pub retainer: f64,
    pub success: f64,
}

impl TieredSchedule {
    /// Evaluate `amount × rate + additive` for both figures
    pub fn evaluate(&self, amount: f64) -> TierFigures {
        let tier = tier_index(amount);
        let rates = self.rates[tier];
        let retainer_additive = self.retainer_additive[tier];
        let success_additive = self.success_additive[tier];
        TierFigures {
            tier,
            rates,
            retainer_additive,
            success_additive,
            retainer: amount * rates.retainer_rate + retainer_additive,
            success: amount * rates.success_rate + success_additive,
        }
    }
}

/// A `{min, max}` fee range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeRange {
    pub min: f64,
    pub max: f64,
}

impl FeeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Pick from the range; `None` means the midpoint
    pub fn select(&self, difficulty: Option<Difficulty>) -> f64 {
        difficulty.unwrap_or_default().pick(self.min, self.max)
    }
}

/// Figures keyed by business size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledAmounts {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl ScaledAmounts {
    pub const fn new(small: f64, medium: f64, large: f64) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    pub fn get(&self, scale: EntityScale) -> f64 {
        match scale {
            EntityScale::Small => self.small,
            EntityScale::Medium => self.medium,
            EntityScale::Large => self.large,
        }
    }
}

/// Figures keyed by applicant type, corporations further keyed by size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplicantAmounts {
    pub individual: f64,
    pub sole_proprietor: f64,
    pub corporation: ScaledAmounts,
}

impl ApplicantAmounts {
    pub fn get(&self, applicant: ApplicantType, scale: EntityScale) -> f64 {
        match applicant {
            ApplicantType::Individual => self.individual,
            ApplicantType::SoleProprietor => self.sole_proprietor,
            ApplicantType::Corporation => self.corporation.get(scale),
        }
    }
}

/// Divorce retainer/success ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivorceSchedule {
    pub negotiation: FeeRange,
    pub litigation: FeeRange,
}

/// Bankruptcy and insolvency retainers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsolvencySchedule {
    pub self_bankruptcy: ApplicantAmounts,
    pub creditor_bankruptcy: f64,
    pub civil_rehabilitation: ApplicantAmounts,
    pub company_arrangement: f64,
    pub special_liquidation: f64,
    pub corporate_reorganization: f64,
    pub voluntary_arrangement: ApplicantAmounts,
}

/// Ratios applied to the main case's litigation fees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreservationSchedule {
    pub standard_retainer_ratio: f64,
    pub standard_success_ratio: f64,
    pub hearing_retainer_ratio: f64,
    pub hearing_success_ratio: f64,
}

/// Criminal defense ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriminalSchedule {
    pub simple: FeeRange,
    pub complex: FeeRange,
}

/// Monthly advisory retainers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvisorySchedule {
    pub business: ScaledAmounts,
    pub individual: f64,
}

/// Per-diem ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySchedule {
    pub half_day: FeeRange,
    pub full_day: FeeRange,
}

/// The complete fee schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSchedule {
    /// Civil litigation
    pub litigation: TieredSchedule,

    /// Suits on promissory notes and checks (half the litigation rates)
    pub promissory: TieredSchedule,

    /// Contract negotiation (a quarter of the litigation rates)
    ///
    /// Also supplies the payment-order retainer.
    pub negotiation: TieredSchedule,

    /// Discount for mediation and settlement negotiation (2/3)
    pub negotiation_discount: f64,

    /// Retainer floor for payment orders
    pub payment_order_minimum_retainer: f64,

    /// Share of the litigation success fee charged for payment orders (1/2)
    pub payment_order_success_ratio: f64,

    pub divorce: DivorceSchedule,
    pub insolvency: InsolvencySchedule,
    pub preservation: PreservationSchedule,
    pub criminal: CriminalSchedule,
    pub advisory: AdvisorySchedule,
    pub daily: DailySchedule,
}

static STANDARD: OnceLock<FeeSchedule> = OnceLock::new();

impl FeeSchedule {
    /// The published schedule, built once and shared for the process lifetime
    ///
    /// # Example
    /// ```
    /// use fee_calculator_core_rs::FeeSchedule;
    ///
    /// let schedule = FeeSchedule::standard();
    /// assert_eq!(schedule.litigation.minimum_retainer, 10.0);
    /// assert!(std::ptr::eq(schedule, FeeSchedule::standard()));
    /// ```
    pub fn standard() -> &'static FeeSchedule {
        STANDARD.get_or_init(FeeSchedule::published)
    }

    /// Build the published schedule
    pub fn published() -> Self {
        Self {
            litigation: TieredSchedule {
                rates: [
                    TierRates::new(0.08, 0.16),
                    TierRates::new(0.05, 0.10),
                    TierRates::new(0.03, 0.06),
                    TierRates::new(0.02, 0.04),
                ],
                retainer_additive: [0.0, 9.0, 69.0, 369.0],
                success_additive: [0.0, 18.0, 138.0, 738.0],
                minimum_retainer: 10.0,
            },
            promissory: TieredSchedule {
                rates: [
                    TierRates::new(0.04, 0.08),
                    TierRates::new(0.025, 0.05),
                    TierRates::new(0.015, 0.03),
                    TierRates::new(0.01, 0.02),
                ],
                retainer_additive: [0.0, 4.5, 34.5, 184.5],
                success_additive: [0.0, 9.0, 69.0, 369.0],
                minimum_retainer: 5.0,
            },
            negotiation: TieredSchedule {
                rates: [
                    TierRates::new(0.02, 0.04),
                    TierRates::new(0.01, 0.02),
                    TierRates::new(0.005, 0.01),
                    TierRates::new(0.003, 0.006),
                ],
                retainer_additive: [0.0, 3.0, 18.0, 78.0],
                success_additive: [0.0, 6.0, 36.0, 156.0],
                minimum_retainer: 10.0,
            },
            negotiation_discount: 2.0 / 3.0,
            payment_order_minimum_retainer: 5.0,
            payment_order_success_ratio: 0.5,
            divorce: DivorceSchedule {
                negotiation: FeeRange::new(20.0, 50.0),
                litigation: FeeRange::new(30.0, 60.0),
            },
            insolvency: InsolvencySchedule {
                self_bankruptcy: ApplicantAmounts {
                    individual: 20.0,
                    sole_proprietor: 50.0,
                    corporation: ScaledAmounts::new(50.0, 80.0, 100.0),
                },
                creditor_bankruptcy: 50.0,
                civil_rehabilitation: ApplicantAmounts {
                    individual: 20.0,
                    sole_proprietor: 30.0,
                    corporation: ScaledAmounts::new(100.0, 150.0, 200.0),
                },
                company_arrangement: 100.0,
                special_liquidation: 100.0,
                corporate_reorganization: 200.0,
                voluntary_arrangement: ApplicantAmounts {
                    individual: 20.0,
                    sole_proprietor: 50.0,
                    corporation: ScaledAmounts::new(50.0, 80.0, 100.0),
                },
            },
            preservation: PreservationSchedule {
                standard_retainer_ratio: 0.5,
                standard_success_ratio: 0.25,
                hearing_retainer_ratio: 2.0 / 3.0,
                hearing_success_ratio: 1.0 / 3.0,
            },
            criminal: CriminalSchedule {
                simple: FeeRange::new(20.0, 50.0),
                complex: FeeRange::new(50.0, 100.0),
            },
            advisory: AdvisorySchedule {
                business: ScaledAmounts::new(5.0, 10.0, 20.0),
                individual: 0.5,
            },
            daily: DailySchedule {
                half_day: FeeRange::new(3.0, 5.0),
                full_day: FeeRange::new(5.0, 10.0),
            },
        }
    }

    /// SHA-256 fingerprint of the schedule contents
    ///
    /// Stamped on estimate documents so an estimate can be matched to the
    /// schedule revision that produced it.
    pub fn fingerprint(&self) -> String {
        // Serialization of plain structs of f64 cannot fail
        let canonical = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_litigation_tiers_are_continuous() {
        let schedule = FeeSchedule::published();
        let lit = &schedule.litigation;

        // Each additive constant closes the gap at the previous tier's bound
        for (tier, bound) in [300.0, 3_000.0, 30_000.0].iter().enumerate() {
            let below = bound * lit.rates[tier].retainer_rate + lit.retainer_additive[tier];
            let above = bound * lit.rates[tier + 1].retainer_rate + lit.retainer_additive[tier + 1];
            assert!((below - above).abs() < 1e-9, "retainer gap at {}", bound);

            let below = bound * lit.rates[tier].success_rate + lit.success_additive[tier];
            let above = bound * lit.rates[tier + 1].success_rate + lit.success_additive[tier + 1];
            assert!((below - above).abs() < 1e-9, "success gap at {}", bound);
        }
    }

    #[test]
    fn test_evaluate_tier_one() {
        let figures = FeeSchedule::published().litigation.evaluate(500.0);
        assert_eq!(figures.tier, 1);
        assert!((figures.retainer - 34.0).abs() < 1e-9);
        assert!((figures.success - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_applicant_lookup() {
        let schedule = FeeSchedule::published();
        let rehab = schedule.insolvency.civil_rehabilitation;
        assert_eq!(rehab.get(ApplicantType::Individual, EntityScale::Large), 20.0);
        assert_eq!(rehab.get(ApplicantType::SoleProprietor, EntityScale::Large), 30.0);
        assert_eq!(rehab.get(ApplicantType::Corporation, EntityScale::Medium), 150.0);
    }

    #[test]
    fn test_fee_range_select() {
        let range = FeeRange::new(5.0, 10.0);
        assert_eq!(range.select(None), 7.5);
        assert_eq!(range.select(Some(Difficulty::Low)), 5.0);
        assert_eq!(range.select(Some(Difficulty::High)), 10.0);
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = FeeSchedule::published().fingerprint();
        let b = FeeSchedule::standard().fingerprint();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_contents() {
        let mut altered = FeeSchedule::published();
        altered.litigation.minimum_retainer = 12.0;
        assert_ne!(altered.fingerprint(), FeeSchedule::published().fingerprint());
    }
}
