//! Shared utilities for label handling and numeric formatting.

use crate::error::{DashboardError, Result};
use polars::prelude::*;

// =============================================================================
// Label Utilities
// =============================================================================

/// Label shown for missing values when a table was not normalized.
pub const MISSING_LABEL: &str = "(missing)";

/// Title-case a label: the first letter of every alphabetic run is upper-cased
/// and the remaining letters of the run are lower-cased.
///
/// # Example
///
/// ```rust,ignore
/// use comment_sense::utils::title_case;
///
/// assert_eq!(title_case("skincare"), "Skincare");
/// assert_eq!(title_case("HAIR-CARE routine"), "Hair-Care Routine");
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(ch);
            in_word = false;
        }
    }

    result
}

/// Borrow a string column of a DataFrame.
///
/// Fails with [`DashboardError::ColumnNotFound`] when the column is absent and
/// with a Polars error when the column is not string-typed.
pub fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| DashboardError::ColumnNotFound(name.to_string()))?;
    Ok(column.as_materialized_series().str()?)
}

/// Fill null values in a string Series, passing every present value through `map`.
pub fn fill_string_nulls_with<F>(series: &Series, fill_value: &str, map: F) -> PolarsResult<Series>
where
    F: Fn(&str) -> String,
{
    let values: Vec<String> = series
        .str()?
        .into_iter()
        .map(|val| match val {
            Some(v) => map(v),
            None => map(fill_value),
        })
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

/// Distinct values of a string column in order of first appearance.
pub fn unique_in_order(values: &StringChunked) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut ordered = Vec::new();

    for val in values.into_iter() {
        let label = val.unwrap_or(MISSING_LABEL);
        if seen.insert(label) {
            ordered.push(label.to_string());
        }
    }

    ordered
}

// =============================================================================
// Numeric Utilities
// =============================================================================

/// Round a value to a fixed number of decimal places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Truncate a string to a maximum number of characters with ellipsis.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// =============================================================================
// Tests
// =============================================================================
