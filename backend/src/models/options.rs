//! Calculation requests
//!
//! One strongly typed options record per case category, carried by the
//! tagged [`CalculationRequest`] union. Economic values are expressed in the
//! schedule's native unit (10,000 JPY). All numeric fields default to zero
//! and all flags to false, so a sparse request file is a valid request.

use serde::{Deserialize, Deserializer, Serialize};

use super::selectors::{
    count_or_default, normalize_count, AdvisoryPlan, ApplicantType, CriminalComplexity,
    CriminalStage, DailyDuration, Difficulty, DivorceCaseType, EntityScale, InsolvencyCase,
    ParseSelectorError, PreservationProcedure,
};

/// Case category, one per calculation entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseCategory {
    /// Civil litigation, including mediation and promissory-note suits
    Litigation,
    ContractNegotiation,
    PaymentOrder,
    Divorce,
    Insolvency,
    Preservation,
    Criminal,
    AdvisoryRetainer,
    DailyRate,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 9] = [
        CaseCategory::Litigation,
        CaseCategory::ContractNegotiation,
        CaseCategory::PaymentOrder,
        CaseCategory::Divorce,
        CaseCategory::Insolvency,
        CaseCategory::Preservation,
        CaseCategory::Criminal,
        CaseCategory::AdvisoryRetainer,
        CaseCategory::DailyRate,
    ];

    /// Wire name, as used in the `category` tag of a request
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseCategory::Litigation => "litigation",
            CaseCategory::ContractNegotiation => "contract-negotiation",
            CaseCategory::PaymentOrder => "payment-order",
            CaseCategory::Divorce => "divorce",
            CaseCategory::Insolvency => "insolvency",
            CaseCategory::Preservation => "preservation",
            CaseCategory::Criminal => "criminal",
            CaseCategory::AdvisoryRetainer => "advisory-retainer",
            CaseCategory::DailyRate => "daily-rate",
        }
    }

    /// Human-readable category name for documents
    pub fn display_name(&self) -> &'static str {
        match self {
            CaseCategory::Litigation => "Civil litigation",
            CaseCategory::ContractNegotiation => "Contract negotiation",
            CaseCategory::PaymentOrder => "Payment order",
            CaseCategory::Divorce => "Divorce",
            CaseCategory::Insolvency => "Bankruptcy and insolvency",
            CaseCategory::Preservation => "Preservation order",
            CaseCategory::Criminal => "Criminal defense",
            CaseCategory::AdvisoryRetainer => "Advisory retainer",
            CaseCategory::DailyRate => "Daily rate",
        }
    }
}

impl std::str::FromStr for CaseCategory {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CaseCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ParseSelectorError::Unknown {
                kind: "case category",
                value: s.to_string(),
                expected: CaseCategory::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl std::fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Civil litigation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LitigationOptions {
    /// Economic value of the claim (native unit)
    pub amount: f64,
    /// Handled by mediation or settlement negotiation rather than suit
    pub is_negotiation_settlement: bool,
    /// Suit on a promissory note or check
    pub is_promissory_instrument: bool,
    /// Continued from an earlier negotiation or mediation stage
    pub is_continued_representation: bool,
    /// Case-specific increase or decrease, typically within ±30
    pub adjustment_percent: f64,
    /// Surcharge for specialist subject matter, ignored unless positive
    pub expertise_percent: f64,
    /// No retainer; the retainer is folded into the success fee
    pub is_success_fee_only: bool,
}

impl LitigationOptions {
    /// Plain litigation on an economic value with no refinements
    pub fn for_amount(amount: f64) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }
}

/// Contract negotiation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationOptions {
    /// Economic value of the contract (native unit)
    pub amount: f64,
    pub adjustment_percent: f64,
}

/// Payment order (summary demand procedure) options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentOrderOptions {
    /// Claimed amount (native unit)
    pub amount: f64,
    /// The debtor may object, moving the case into ordinary litigation
    pub may_escalate_to_litigation: bool,
}

/// Divorce options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivorceOptions {
    pub case_type: DivorceCaseType,
    /// Unset means the midpoint of the range
    pub complexity: Option<Difficulty>,
    pub is_continued_representation: bool,
    /// Property division, alimony or consolation money at stake (native unit)
    pub property_value: f64,
    pub expertise_percent: f64,
}

/// Bankruptcy and insolvency options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsolvencyOptions {
    pub case_subtype: InsolvencyCase,
    pub applicant_type: ApplicantType,
    /// Only consulted for corporate applicants
    pub entity_scale: EntityScale,
    pub expertise_percent: f64,
}

impl Default for InsolvencyOptions {
    fn default() -> Self {
        Self {
            case_subtype: InsolvencyCase::SelfBankruptcy,
            applicant_type: ApplicantType::Individual,
            entity_scale: EntityScale::Small,
            expertise_percent: 0.0,
        }
    }
}

/// Preservation order (provisional attachment or injunction) options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreservationOptions {
    /// Economic value of the main case (native unit)
    pub amount: f64,
    pub procedure: PreservationProcedure,
    /// Taken on together with the main case
    pub with_main_case: bool,
}

/// Criminal defense options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriminalOptions {
    pub stage: CriminalStage,
    pub complexity: CriminalComplexity,
    /// Unset means the midpoint of the range
    pub difficulty: Option<Difficulty>,
    pub is_continued_representation: bool,
    pub expertise_percent: f64,
}

/// Advisory retainer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryOptions {
    pub plan: AdvisoryPlan,
    /// Only consulted for business clients
    pub scale: EntityScale,
    /// Contract length in months
    #[serde(deserialize_with = "deserialize_months")]
    pub months: u32,
}

/// Default contract length for advisory retainers
pub const DEFAULT_ADVISORY_MONTHS: u32 = 12;

impl Default for AdvisoryOptions {
    fn default() -> Self {
        Self {
            plan: AdvisoryPlan::Business,
            scale: EntityScale::Small,
            months: DEFAULT_ADVISORY_MONTHS,
        }
    }
}

/// Daily rate options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRateOptions {
    pub duration: DailyDuration,
    /// Unset means the midpoint of the range
    pub rate: Option<Difficulty>,
    #[serde(deserialize_with = "deserialize_days")]
    pub days: u32,
}

/// Default number of days billed at the daily rate
pub const DEFAULT_DAILY_DAYS: u32 = 1;

impl Default for DailyRateOptions {
    fn default() -> Self {
        Self {
            duration: DailyDuration::HalfDay,
            rate: None,
            days: DEFAULT_DAILY_DAYS,
        }
    }
}

// ========================================================================
// Count Fields
// ========================================================================

/// A month or day count as it may appear in a request file
#[derive(Deserialize)]
#[serde(untagged)]
enum CountInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CountInput {
    fn normalize(self, default: u32) -> u32 {
        match self {
            CountInput::Integer(count) => count_or_default(count, default),
            CountInput::Float(count) if count.is_finite() => {
                count_or_default(count.trunc() as i64, default)
            }
            CountInput::Float(_) => default,
            CountInput::Text(text) => normalize_count(&text, default),
        }
    }
}

/// Read a count leniently: `null`, zero, negative or unparseable values
/// give `default`
fn deserialize_count<'de, D>(deserializer: D, default: u32) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<CountInput>::deserialize(deserializer)?;
    Ok(input.map_or(default, |count| count.normalize(default)))
}

fn deserialize_months<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_count(deserializer, DEFAULT_ADVISORY_MONTHS)
}

fn deserialize_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_count(deserializer, DEFAULT_DAILY_DAYS)
}

/// A calculation request: the case category plus its options
///
/// # Example
/// ```
/// use fee_calculator_core_rs::models::{CalculationRequest, CaseCategory};
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"category": "litigation", "amount": 500, "is_continued_representation": true}"#,
/// ).unwrap();
/// assert_eq!(request.category(), CaseCategory::Litigation);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum CalculationRequest {
    Litigation(LitigationOptions),
    ContractNegotiation(NegotiationOptions),
    PaymentOrder(PaymentOrderOptions),
    Divorce(DivorceOptions),
    Insolvency(InsolvencyOptions),
    Preservation(PreservationOptions),
    Criminal(CriminalOptions),
    AdvisoryRetainer(AdvisoryOptions),
    DailyRate(DailyRateOptions),
}

impl CalculationRequest {
    /// Category this request belongs to
    pub fn category(&self) -> CaseCategory {
        match self {
            CalculationRequest::Litigation(_) => CaseCategory::Litigation,
            CalculationRequest::ContractNegotiation(_) => CaseCategory::ContractNegotiation,
            CalculationRequest::PaymentOrder(_) => CaseCategory::PaymentOrder,
            CalculationRequest::Divorce(_) => CaseCategory::Divorce,
            CalculationRequest::Insolvency(_) => CaseCategory::Insolvency,
            CalculationRequest::Preservation(_) => CaseCategory::Preservation,
            CalculationRequest::Criminal(_) => CaseCategory::Criminal,
            CalculationRequest::AdvisoryRetainer(_) => CaseCategory::AdvisoryRetainer,
            CalculationRequest::DailyRate(_) => CaseCategory::DailyRate,
        }
    }
}
