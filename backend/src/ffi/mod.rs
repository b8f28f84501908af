//! Python bindings
//!
//! Thin wrappers over the calculator for the `pyo3` feature. Every call
//! uses the published schedule.

pub mod types;

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::calculator;
use crate::models::CalculationRequest;
use crate::schedule::FeeSchedule;
use types::{parse_calculation_request, result_to_py, value_error};

/// Calculate fees from a request dict
///
/// # Example (from Python)
///
/// ```python
/// from fee_calculator_core_rs import calculate
///
/// result = calculate({"category": "litigation", "amount": 500})
/// assert result["retainer_fee"] == 340_000
/// ```
///
/// # Errors
///
/// Raises ValueError if the category or a selector is unknown.
#[pyfunction]
pub fn calculate<'py>(
    py: Python<'py>,
    request: &Bound<'py, PyDict>,
) -> PyResult<Bound<'py, PyDict>> {
    let request = parse_calculation_request(request)?;
    let result = calculator::calculate(FeeSchedule::standard(), &request);
    result_to_py(py, &result)
}

/// Calculate fees from a JSON request, returning the JSON result
#[pyfunction]
pub fn calculate_json(request_json: &str) -> PyResult<String> {
    let request: CalculationRequest = serde_json::from_str(request_json).map_err(value_error)?;
    let result = calculator::calculate(FeeSchedule::standard(), &request);
    serde_json::to_string(&result).map_err(value_error)
}

/// Self-documenting JSON description of the fee schedule
#[pyfunction]
pub fn get_fee_schedule_doc() -> String {
    crate::schedule::get_fee_schedule_doc()
}
