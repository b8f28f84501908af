//! Discrete selectors used by the calculation options
//!
//! Every selector serializes as kebab-case and parses from the same names via
//! `FromStr`, so request files, the CLI and the Python binding all accept the
//! identical vocabulary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading caller-supplied selector strings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSelectorError {
    #[error("Unknown {kind} '{value}'. Expected one of: {expected}")]
    Unknown {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

macro_rules! selector_names {
    (
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical kebab-case name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseSelectorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    other => Err(ParseSelectorError::Unknown {
                        kind: $kind,
                        value: other.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Three-level difficulty selector for `{min, max}` ranges
///
/// Low picks the minimum, High the maximum, Medium the midpoint.
/// Callers that leave the selector unset get the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    /// Pick a figure from a `{min, max}` range
    ///
    /// # Example
    /// ```
    /// use fee_calculator_core_rs::models::Difficulty;
    ///
    /// assert_eq!(Difficulty::Low.pick(5.0, 10.0), 5.0);
    /// assert_eq!(Difficulty::Medium.pick(5.0, 10.0), 7.5);
    /// assert_eq!(Difficulty::High.pick(5.0, 10.0), 10.0);
    /// ```
    pub fn pick(self, min: f64, max: f64) -> f64 {
        match self {
            Difficulty::Low => min,
            Difficulty::Medium => (min + max) / 2.0,
            Difficulty::High => max,
        }
    }
}

selector_names!(Difficulty, "difficulty" {
    Low => "low",
    Medium => "medium" | "mid" | "standard",
    High => "high",
});

/// Divorce matter handled out of court or in litigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DivorceCaseType {
    /// Negotiation or family-court mediation
    #[default]
    Negotiation,
    Litigation,
}

selector_names!(DivorceCaseType, "divorce case type" {
    Negotiation => "negotiation" | "mediation",
    Litigation => "litigation",
});

/// Insolvency proceeding subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsolvencyCase {
    /// Debtor-filed bankruptcy
    SelfBankruptcy,
    /// Bankruptcy filed by a creditor
    #[serde(alias = "other-bankruptcy")]
    CreditorBankruptcy,
    CivilRehabilitation,
    CompanyArrangement,
    SpecialLiquidation,
    CorporateReorganization,
    /// Out-of-court debt arrangement with creditors
    VoluntaryArrangement,
}

selector_names!(InsolvencyCase, "insolvency case" {
    SelfBankruptcy => "self-bankruptcy",
    CreditorBankruptcy => "creditor-bankruptcy" | "other-bankruptcy",
    CivilRehabilitation => "civil-rehabilitation",
    CompanyArrangement => "company-arrangement",
    SpecialLiquidation => "special-liquidation",
    CorporateReorganization => "corporate-reorganization",
    VoluntaryArrangement => "voluntary-arrangement",
});

/// Who is applying in an insolvency matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicantType {
    /// Individual without business income
    #[default]
    Individual,
    SoleProprietor,
    Corporation,
}

selector_names!(ApplicantType, "applicant type" {
    Individual => "individual",
    SoleProprietor => "sole-proprietor",
    Corporation => "corporation",
});

/// Size of a business client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityScale {
    #[default]
    Small,
    Medium,
    Large,
}

impl EntityScale {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            EntityScale::Small => "small",
            EntityScale::Medium => "medium-sized",
            EntityScale::Large => "large",
        }
    }
}

selector_names!(EntityScale, "entity scale" {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Procedure for a provisional attachment or injunction application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreservationProcedure {
    /// Ex parte, decided on the papers
    #[default]
    Standard,
    /// Decided after a hearing or oral argument
    #[serde(alias = "hearing")]
    WithHearing,
}

selector_names!(PreservationProcedure, "preservation procedure" {
    Standard => "standard" | "basic",
    WithHearing => "with-hearing" | "hearing",
});

/// Procedural stage of a criminal matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriminalStage {
    PreIndictment,
    /// First instance after indictment
    #[default]
    PostIndictment,
    Appeal,
}

selector_names!(CriminalStage, "criminal stage" {
    PreIndictment => "pre-indictment",
    PostIndictment => "post-indictment",
    Appeal => "appeal",
});

/// Complexity of a criminal matter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriminalComplexity {
    /// Facts are simple and not contested
    #[default]
    Simple,
    Complex,
}

selector_names!(CriminalComplexity, "criminal complexity" {
    Simple => "simple",
    Complex => "complex",
});

/// Advisory (counsel) retainer client type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryPlan {
    #[default]
    Business,
    Individual,
}

selector_names!(AdvisoryPlan, "advisory plan" {
    Business => "business",
    Individual => "individual",
});

/// Time commitment billed at the daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DailyDuration {
    /// Round trip of two to four hours
    #[default]
    HalfDay,
    /// Round trip of more than four hours
    FullDay,
}

selector_names!(DailyDuration, "daily duration" {
    HalfDay => "half-day" | "half",
    FullDay => "full-day" | "full",
});

/// Normalize a caller-supplied count such as a contract length or day count
///
/// Leading whitespace and a trailing non-digit suffix are ignored, as a
/// form field would be read. Unparseable, zero or negative input yields
/// `default`.
///
/// # Example
/// ```
/// use fee_calculator_core_rs::models::normalize_count;
///
/// assert_eq!(normalize_count("6", 12), 6);
/// assert_eq!(normalize_count("24 months", 12), 24);
/// assert_eq!(normalize_count("", 12), 12);
/// assert_eq!(normalize_count("0", 1), 1);
/// ```
pub fn normalize_count(text: &str, default: u32) -> u32 {
    let trimmed = text.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}

/// Numeric counterpart of [`normalize_count`]: zero, negative or
/// out-of-range counts yield `default`
///
/// # Example
/// ```
/// use fee_calculator_core_rs::models::count_or_default;
///
/// assert_eq!(count_or_default(6, 12), 6);
/// assert_eq!(count_or_default(0, 12), 12);
/// assert_eq!(count_or_default(-3, 1), 1);
/// ```
pub fn count_or_default(count: i64, default: u32) -> u32 {
    u32::try_from(count)
        .ok()
        .filter(|c| *c > 0)
        .unwrap_or(default)
}
