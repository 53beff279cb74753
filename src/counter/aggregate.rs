//! Calorie aggregation over the form's categories.

use crate::counter::sanitize::{clean_input, coerce_number, invalid_input};
use crate::error::{CounterError, Result};
use crate::models::{Category, Entry, Summary};
use crate::state::FormState;

/// Sum the calorie fields of a category's entries.
///
/// Each field is cleaned first; the first exponential-notation literal found
/// aborts the sum with [`CounterError::InvalidInput`] naming the offending
/// substring. Empty fields contribute 0, and other unparseable text coerces
/// to NaN rather than failing.
pub fn sum_entries(entries: &[Entry]) -> Result<f64> {
    let mut total = 0.0;
    for entry in entries {
        let cleaned = clean_input(&entry.calories);
        if let Some(bad) = invalid_input(&cleaned) {
            return Err(CounterError::InvalidInput(bad.to_string()));
        }
        total += coerce_number(&cleaned);
    }
    Ok(total)
}

/// Compute the remaining-calorie summary for the whole form.
///
/// Sums the five categories independently and coerces the budget. Any
/// failure, including a budget that cleans to not-a-number, aborts the whole
/// computation; no partial summary is ever produced.
pub fn compute_summary(state: &FormState) -> Result<Summary> {
    let mut consumed = 0.0;
    for category in Category::FOOD {
        consumed += sum_entries(state.entries(category))?;
    }
    let exercise = sum_entries(state.entries(Category::Exercise))?;

    let budget = coerce_number(&clean_input(state.budget()));
    if budget.is_nan() {
        return Err(CounterError::InvalidBudget);
    }

    Ok(Summary::new(budget, consumed, exercise))
}
