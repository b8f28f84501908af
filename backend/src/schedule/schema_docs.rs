//! Fee Schedule Documentation
//!
//! Self-documenting description of every case category: which table it
//! reads, how retainer and success fee are derived, and which options it
//! takes. Exported as JSON for `fee-calc schedule` and the Python binding.

use serde::{Deserialize, Serialize};

use super::table::FeeSchedule;
use crate::models::CaseCategory;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// How a category arrives at its figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FeeKind {
    /// Percentage of economic value with per-tier additive constants
    Tiered,
    /// Fixed figure or `{min, max}` range looked up by selectors
    FlatRate,
    /// Unit rate multiplied by a number of months or days
    Periodic,
}

/// Worked example for a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeExample {
    /// Scenario description
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for one case category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeCategoryDoc {
    /// Request tag (e.g., "payment-order")
    pub name: String,

    /// Human-readable name (e.g., "Payment order")
    pub display_name: String,

    pub kind: FeeKind,

    /// What kind of matter this covers
    pub description: String,

    /// Retainer derivation (plain text)
    pub retainer_formula: String,

    /// Success fee derivation (plain text)
    pub success_formula: String,

    /// Accepted option fields
    pub options: Vec<String>,

    /// Rust source file location
    pub source_location: String,

    /// Example calculation
    pub example: Option<FeeExample>,
}

/// Complete fee schedule documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeScheduleDoc {
    pub version: String,
    pub generated_at: String,
    /// SHA-256 of the schedule table the docs describe
    pub schedule_fingerprint: String,
    pub categories: Vec<FeeCategoryDoc>,
}

/// Trait for types that can provide fee schedule documentation
pub trait FeeScheduleDocumented {
    fn schema_docs() -> Vec<FeeCategoryDoc>;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn doc(category: CaseCategory, kind: FeeKind, file: &str) -> FeeCategoryDoc {
    FeeCategoryDoc {
        name: category.as_str().to_string(),
        display_name: category.display_name().to_string(),
        kind,
        description: String::new(),
        retainer_formula: String::new(),
        success_formula: String::new(),
        options: Vec::new(),
        source_location: format!("backend/src/calculator/{}", file),
        example: None,
    }
}

impl FeeScheduleDocumented for FeeSchedule {
    fn schema_docs() -> Vec<FeeCategoryDoc> {
        vec![
            FeeCategoryDoc {
                description: "Civil suits, mediation and settlement negotiation, and suits on \
                    promissory notes or checks."
                    .to_string(),
                retainer_formula: "amount × tier retainer rate + tier additive; × 2/3 for \
                    negotiation; × 1/2 when continued; floored at 10 (5 for promissory); \
                    × (1 + adjustment%) × (1 + expertise%)"
                    .to_string(),
                success_formula: "amount × tier success rate + tier additive; × 2/3 for \
                    negotiation; × (1 + adjustment%) × (1 + expertise%); success-only mode adds \
                    the retainer and charges no retainer"
                    .to_string(),
                options: strings(&[
                    "amount",
                    "is_negotiation_settlement",
                    "is_promissory_instrument",
                    "is_continued_representation",
                    "adjustment_percent",
                    "expertise_percent",
                    "is_success_fee_only",
                ]),
                example: Some(FeeExample {
                    scenario: "Claim worth 5,000,000 JPY".to_string(),
                    inputs: pairs(&[("amount", "500 (万円)")]),
                    calculation: "retainer 500 × 5% + 9 = 34; success 500 × 10% + 18 = 68"
                        .to_string(),
                    result: "retainer ¥340,000, success ¥680,000".to_string(),
                }),
                ..doc(CaseCategory::Litigation, FeeKind::Tiered, "litigation.rs")
            },
            FeeCategoryDoc {
                description: "Negotiating the conclusion of a contract.".to_string(),
                retainer_formula: "amount × tier retainer rate + tier additive; floored at 10; \
                    × (1 + adjustment%)"
                    .to_string(),
                success_formula: "amount × tier success rate + tier additive; × (1 + adjustment%)"
                    .to_string(),
                options: strings(&["amount", "adjustment_percent"]),
                example: Some(FeeExample {
                    scenario: "Contract worth 50,000,000 JPY".to_string(),
                    inputs: pairs(&[("amount", "5000 (万円)")]),
                    calculation: "retainer 5000 × 0.5% + 18 = 43; success 5000 × 1% + 36 = 86"
                        .to_string(),
                    result: "retainer ¥430,000, success ¥860,000".to_string(),
                }),
                ..doc(CaseCategory::ContractNegotiation, FeeKind::Tiered, "negotiation.rs")
            },
            FeeCategoryDoc {
                description: "Summary demand procedure for a money claim.".to_string(),
                retainer_formula: "contract-negotiation retainer formula, floored at 5".to_string(),
                success_formula: "litigation success formula × 1/2, chargeable only on actual \
                    recovery; if the case may move into litigation, the additional retainer is \
                    max(litigation retainer − payment-order retainer, 0)"
                    .to_string(),
                options: strings(&["amount", "may_escalate_to_litigation"]),
                example: Some(FeeExample {
                    scenario: "Claim of 50,000,000 JPY".to_string(),
                    inputs: pairs(&[("amount", "5000 (万円)")]),
                    calculation: "retainer 5000 × 0.5% + 18 = 43; success (5000 × 6% + 138) / 2 \
                        = 219"
                        .to_string(),
                    result: "retainer ¥430,000, success ¥2,190,000".to_string(),
                }),
                ..doc(CaseCategory::PaymentOrder, FeeKind::Tiered, "payment_order.rs")
            },
            FeeCategoryDoc {
                description: "Divorce by negotiation, mediation or litigation.".to_string(),
                retainer_formula: "range 20–50 (negotiation) or 30–60 (litigation) by complexity; \
                    × 1/2 when continued; + litigation retainer on property value; \
                    × (1 + expertise%)"
                    .to_string(),
                success_formula: "same range figure + litigation success fee on property value; \
                    × (1 + expertise%)"
                    .to_string(),
                options: strings(&[
                    "case_type",
                    "complexity",
                    "is_continued_representation",
                    "property_value",
                    "expertise_percent",
                ]),
                example: Some(FeeExample {
                    scenario: "Divorce mediation, standard complexity".to_string(),
                    inputs: pairs(&[("case_type", "negotiation"), ("complexity", "medium")]),
                    calculation: "(20 + 50) / 2 = 35".to_string(),
                    result: "retainer ¥350,000, success ¥350,000".to_string(),
                }),
                ..doc(CaseCategory::Divorce, FeeKind::FlatRate, "divorce.rs")
            },
            FeeCategoryDoc {
                description: "Bankruptcy, civil rehabilitation, reorganization, liquidation and \
                    out-of-court arrangement."
                    .to_string(),
                retainer_formula: "fixed figure by subtype, applicant type and business size; \
                    × (1 + expertise%)"
                    .to_string(),
                success_formula: "none; agreed separately and contingent on discharge or plan \
                    confirmation"
                    .to_string(),
                options: strings(&[
                    "case_subtype",
                    "applicant_type",
                    "entity_scale",
                    "expertise_percent",
                ]),
                example: Some(FeeExample {
                    scenario: "Self-filed bankruptcy of an individual".to_string(),
                    inputs: pairs(&[
                        ("case_subtype", "self-bankruptcy"),
                        ("applicant_type", "individual"),
                    ]),
                    calculation: "fixed 20".to_string(),
                    result: "retainer ¥200,000, success ¥0".to_string(),
                }),
                ..doc(CaseCategory::Insolvency, FeeKind::FlatRate, "insolvency.rs")
            },
            FeeCategoryDoc {
                description: "Provisional attachment and provisional disposition applications."
                    .to_string(),
                retainer_formula: "litigation retainer on the main case × 1/2 (× 2/3 with a \
                    hearing)"
                    .to_string(),
                success_formula: "litigation success fee on the main case × 1/4 (× 1/3 with a \
                    hearing), only when significant or the main objective is attained"
                    .to_string(),
                options: strings(&["amount", "procedure", "with_main_case"]),
                example: Some(FeeExample {
                    scenario: "Ex parte attachment securing a 5,000,000 JPY claim".to_string(),
                    inputs: pairs(&[("amount", "500 (万円)"), ("procedure", "standard")]),
                    calculation: "retainer 34 × 1/2 = 17; success 68 × 1/4 = 17".to_string(),
                    result: "retainer ¥170,000, success ¥170,000".to_string(),
                }),
                ..doc(CaseCategory::Preservation, FeeKind::Tiered, "preservation.rs")
            },
            FeeCategoryDoc {
                description: "Criminal defense before indictment, at first instance and on \
                    appeal."
                    .to_string(),
                retainer_formula: "range 20–50 (simple) or 50–100 (complex) by difficulty; \
                    × 1/2 when continued and simple; × (1 + expertise%)"
                    .to_string(),
                success_formula: "same range figure × (1 + expertise%)".to_string(),
                options: strings(&[
                    "stage",
                    "complexity",
                    "difficulty",
                    "is_continued_representation",
                    "expertise_percent",
                ]),
                example: None,
                ..doc(CaseCategory::Criminal, FeeKind::FlatRate, "criminal.rs")
            },
            FeeCategoryDoc {
                description: "Monthly counsel retainer.".to_string(),
                retainer_formula: "monthly fee 5 / 10 / 20 by business size, 0.5 for \
                    individuals; total = monthly × months"
                    .to_string(),
                success_formula: "none".to_string(),
                options: strings(&["plan", "scale", "months"]),
                example: Some(FeeExample {
                    scenario: "Medium-sized business, one year".to_string(),
                    inputs: pairs(&[("plan", "business"), ("scale", "medium"), ("months", "12")]),
                    calculation: "10 × 12 = 120".to_string(),
                    result: "monthly ¥100,000, total ¥1,200,000".to_string(),
                }),
                ..doc(CaseCategory::AdvisoryRetainer, FeeKind::Periodic, "advisory.rs")
            },
            FeeCategoryDoc {
                description: "Per-diem for time away from the office.".to_string(),
                retainer_formula: "per-diem 3–5 (half day) or 5–10 (full day) by rate; total = \
                    per-diem × days"
                    .to_string(),
                success_formula: "none".to_string(),
                options: strings(&["duration", "rate", "days"]),
                example: Some(FeeExample {
                    scenario: "Three full days at the standard rate".to_string(),
                    inputs: pairs(&[("duration", "full-day"), ("days", "3")]),
                    calculation: "(5 + 10) / 2 = 7.5; 7.5 × 3 = 22.5".to_string(),
                    result: "per day ¥75,000, total ¥225,000".to_string(),
                }),
                ..doc(CaseCategory::DailyRate, FeeKind::Periodic, "daily.rs")
            },
        ]
    }
}

/// Generate the fee schedule documentation as pretty-printed JSON
pub fn get_fee_schedule_doc() -> String {
    let doc = FeeScheduleDoc {
        version: "1.0".to_string(),
        generated_at: "2025-01-01T00:00:00Z".to_string(), // Static for determinism
        schedule_fingerprint: FeeSchedule::standard().fingerprint(),
        categories: FeeSchedule::schema_docs(),
    };

    serde_json::to_string_pretty(&doc).expect("Schedule doc serialization should not fail")
}
