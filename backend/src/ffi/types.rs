//! Type conversion utilities for FFI boundary
//!
//! Converts between Python dicts and the calculator's request and result
//! types. Selector strings go through the same `FromStr` impls the request
//! files use, so Python callers get the identical vocabulary and error
//! messages.

use std::str::FromStr;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyString};

use crate::models::{
    count_or_default, normalize_count, AdvisoryOptions, CalculationRequest, CalculationResult,
    CaseCategory, CriminalOptions, DailyRateOptions, DivorceOptions, FeeDetail, InsolvencyOptions,
    LitigationOptions, NegotiationOptions, ParseSelectorError, PaymentOrderOptions,
    PreservationOptions, DEFAULT_ADVISORY_MONTHS, DEFAULT_DAILY_DAYS,
};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing; conversion errors pass
/// through.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| value_error(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field; a missing key and Python `None` both give
/// `None`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    Ok(extract_optional(dict, key)?.unwrap_or(default))
}

/// Extract a selector given by name, e.g. `"with-hearing"`
fn extract_selector<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromStr<Err = ParseSelectorError>,
{
    match extract_optional::<String>(dict, key)? {
        Some(text) => text.parse().map(Some).map_err(value_error),
        None => Ok(None),
    }
}

/// Extract a month or day count
///
/// Accepts an int or a numeric string; missing, zero, negative or
/// unparseable values give `default`.
fn extract_count(dict: &Bound<'_, PyDict>, key: &str, default: u32) -> PyResult<u32> {
    let Some(value) = dict.get_item(key)? else {
        return Ok(default);
    };
    if value.is_none() {
        return Ok(default);
    }
    if let Ok(text) = value.downcast::<PyString>() {
        return Ok(normalize_count(&text.to_cow()?, default));
    }
    let count: i64 = value.extract()?;
    Ok(count_or_default(count, default))
}

// ========================================================================
// Request Parser
// ========================================================================

/// Convert a Python dict to a CalculationRequest
///
/// The dict carries a `category` key plus that category's option fields;
/// every option field is optional.
///
/// # Errors
///
/// Returns PyValueError if:
/// - `category` is missing or unknown
/// - A selector string is unknown
/// - A field has the wrong Python type
pub fn parse_calculation_request(dict: &Bound<'_, PyDict>) -> PyResult<CalculationRequest> {
    let category: String = extract_required(dict, "category")?;
    let category: CaseCategory = category.parse().map_err(value_error)?;

    let request = match category {
        CaseCategory::Litigation => CalculationRequest::Litigation(LitigationOptions {
            amount: extract_with_default(dict, "amount", 0.0)?,
            is_negotiation_settlement: extract_with_default(
                dict,
                "is_negotiation_settlement",
                false,
            )?,
            is_promissory_instrument: extract_with_default(
                dict,
                "is_promissory_instrument",
                false,
            )?,
            is_continued_representation: extract_with_default(
                dict,
                "is_continued_representation",
                false,
            )?,
            adjustment_percent: extract_with_default(dict, "adjustment_percent", 0.0)?,
            expertise_percent: extract_with_default(dict, "expertise_percent", 0.0)?,
            is_success_fee_only: extract_with_default(dict, "is_success_fee_only", false)?,
        }),
        CaseCategory::ContractNegotiation => {
            CalculationRequest::ContractNegotiation(NegotiationOptions {
                amount: extract_with_default(dict, "amount", 0.0)?,
                adjustment_percent: extract_with_default(dict, "adjustment_percent", 0.0)?,
            })
        }
        CaseCategory::PaymentOrder => CalculationRequest::PaymentOrder(PaymentOrderOptions {
            amount: extract_with_default(dict, "amount", 0.0)?,
            may_escalate_to_litigation: extract_with_default(
                dict,
                "may_escalate_to_litigation",
                false,
            )?,
        }),
        CaseCategory::Divorce => CalculationRequest::Divorce(DivorceOptions {
            case_type: extract_selector(dict, "case_type")?.unwrap_or_default(),
            complexity: extract_selector(dict, "complexity")?,
            is_continued_representation: extract_with_default(
                dict,
                "is_continued_representation",
                false,
            )?,
            property_value: extract_with_default(dict, "property_value", 0.0)?,
            expertise_percent: extract_with_default(dict, "expertise_percent", 0.0)?,
        }),
        CaseCategory::Insolvency => {
            let defaults = InsolvencyOptions::default();
            CalculationRequest::Insolvency(InsolvencyOptions {
                case_subtype: extract_selector(dict, "case_subtype")?
                    .unwrap_or(defaults.case_subtype),
                applicant_type: extract_selector(dict, "applicant_type")?
                    .unwrap_or(defaults.applicant_type),
                entity_scale: extract_selector(dict, "entity_scale")?
                    .unwrap_or(defaults.entity_scale),
                expertise_percent: extract_with_default(dict, "expertise_percent", 0.0)?,
            })
        }
        CaseCategory::Preservation => CalculationRequest::Preservation(PreservationOptions {
            amount: extract_with_default(dict, "amount", 0.0)?,
            procedure: extract_selector(dict, "procedure")?.unwrap_or_default(),
            with_main_case: extract_with_default(dict, "with_main_case", false)?,
        }),
        CaseCategory::Criminal => CalculationRequest::Criminal(CriminalOptions {
            stage: extract_selector(dict, "stage")?.unwrap_or_default(),
            complexity: extract_selector(dict, "complexity")?.unwrap_or_default(),
            difficulty: extract_selector(dict, "difficulty")?,
            is_continued_representation: extract_with_default(
                dict,
                "is_continued_representation",
                false,
            )?,
            expertise_percent: extract_with_default(dict, "expertise_percent", 0.0)?,
        }),
        CaseCategory::AdvisoryRetainer => CalculationRequest::AdvisoryRetainer(AdvisoryOptions {
            plan: extract_selector(dict, "plan")?.unwrap_or_default(),
            scale: extract_selector(dict, "scale")?.unwrap_or_default(),
            months: extract_count(dict, "months", DEFAULT_ADVISORY_MONTHS)?,
        }),
        CaseCategory::DailyRate => CalculationRequest::DailyRate(DailyRateOptions {
            duration: extract_selector(dict, "duration")?.unwrap_or_default(),
            rate: extract_selector(dict, "rate")?,
            days: extract_count(dict, "days", DEFAULT_DAILY_DAYS)?,
        }),
    };

    Ok(request)
}

// ========================================================================
// Result Conversion
// ========================================================================

fn detail_to_py<'py>(py: Python<'py>, detail: &FeeDetail) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    match detail {
        FeeDetail::Standard => {
            dict.set_item("kind", "standard")?;
        }
        FeeDetail::PaymentOrder {
            transition_surcharge,
        } => {
            dict.set_item("kind", "payment_order")?;
            dict.set_item("transition_surcharge", *transition_surcharge)?;
        }
        FeeDetail::Preservation { main_case_retainer } => {
            dict.set_item("kind", "preservation")?;
            dict.set_item("main_case_retainer", *main_case_retainer)?;
        }
        FeeDetail::Advisory {
            monthly_fee,
            total_fee,
            months,
        } => {
            dict.set_item("kind", "advisory")?;
            dict.set_item("monthly_fee", *monthly_fee)?;
            dict.set_item("total_fee", *total_fee)?;
            dict.set_item("months", *months)?;
        }
        FeeDetail::Daily {
            per_day,
            total,
            days,
        } => {
            dict.set_item("kind", "daily")?;
            dict.set_item("per_day", *per_day)?;
            dict.set_item("total", *total)?;
            dict.set_item("days", *days)?;
        }
    }
    Ok(dict)
}

/// Convert a CalculationResult to a Python dict
///
/// Field names match the JSON form of the result.
pub fn result_to_py<'py>(
    py: Python<'py>,
    result: &CalculationResult,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("category", result.category.as_str())?;
    dict.set_item("retainer_fee", result.retainer_fee)?;
    dict.set_item("success_fee", result.success_fee)?;
    dict.set_item("retainer_formula", &result.retainer_formula)?;
    dict.set_item("success_formula", &result.success_formula)?;

    let notes = PyList::empty_bound(py);
    for note in &result.notes {
        let note_dict = PyDict::new_bound(py);
        note_dict.set_item("code", note.code.as_str())?;
        note_dict.set_item("text", &note.text)?;
        notes.append(note_dict)?;
    }
    dict.set_item("notes", notes)?;

    dict.set_item("explanatory_note", result.explanatory_note.as_deref())?;
    dict.set_item("detail", detail_to_py(py, &result.detail)?)?;

    Ok(dict)
}
