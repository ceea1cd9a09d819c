//! Column contract checks and label normalization applied at load time.

use crate::error::{DashboardError, Result};
use crate::types::{
    CLEANED_TEXT, COMMENT_ID, LIKE_COUNT, LabelColumn, REQUIRED_COLUMNS, TEXT_ORIGINAL,
};
use crate::utils::{fill_string_nulls_with, title_case};
use polars::prelude::*;
use tracing::{debug, warn};

/// Fail with every required column the frame does not provide.
pub(crate) fn validate_columns(df: &DataFrame) -> Result<()> {
    let present: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.contains(required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::MissingColumns(missing))
    }
}

/// Cast text and label columns to strings and the like count to `Float64`.
pub(crate) fn coerce_types(mut df: DataFrame) -> Result<DataFrame> {
    let text_columns = [COMMENT_ID, TEXT_ORIGINAL, CLEANED_TEXT]
        .into_iter()
        .chain(LabelColumn::ALL.iter().map(|c| c.column_name()));

    for name in text_columns {
        let column = df.column(name)?;
        if column.dtype() != &DataType::String {
            debug!("Casting column '{}' from {:?} to String", name, column.dtype());
            let cast = column.cast(&DataType::String)?;
            df.with_column(cast)?;
        }
    }

    let likes = df.column(LIKE_COUNT)?.as_materialized_series().clone();
    let nulls_before = likes.null_count();
    let likes = like_counts_to_f64(&likes)?;
    let introduced = likes.null_count().saturating_sub(nulls_before);
    if introduced > 0 {
        warn!(
            "{} value(s) in '{}' are not numeric and will be ignored",
            introduced, LIKE_COUNT
        );
    }
    df.with_column(likes)?;

    Ok(df)
}

/// Convert a like-count series to `Float64`.
///
/// String columns are parsed leniently (surrounding whitespace and thousands
/// separators are tolerated); anything unparsable becomes null.
fn like_counts_to_f64(series: &Series) -> Result<Series> {
    if series.dtype() != &DataType::String {
        return Ok(series.cast(&DataType::Float64)?);
    }

    let values: Vec<Option<f64>> = series
        .str()?
        .into_iter()
        .map(|val| {
            val.map(|v| v.trim().replace(',', ""))
                .filter(|v| !v.is_empty())
                .and_then(|v| v.parse::<f64>().ok())
        })
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

/// Replace missing labels with their fallbacks and title-case categories.
///
/// Missing sentiment and spam flags become `Other`; missing categories become
/// `Uncategorized`. Every category is title-cased so that comparisons
/// downstream can be exact.
pub(crate) fn normalize_labels(mut df: DataFrame) -> Result<DataFrame> {
    for column in LabelColumn::ALL {
        let series = df.column(column.column_name())?.as_materialized_series();
        let missing = series.null_count();
        if missing > 0 {
            debug!(
                "Filling {} missing '{}' label(s) with '{}'",
                missing,
                column,
                column.missing_fallback()
            );
        }

        let normalized = match column {
            LabelColumn::Category => {
                fill_string_nulls_with(series, column.missing_fallback(), title_case)?
            }
            LabelColumn::Sentiment | LabelColumn::SpamFlag => {
                fill_string_nulls_with(series, column.missing_fallback(), |v| v.to_string())?
            }
        };
        df.with_column(normalized)?;
    }

    Ok(df)
}

/// Warn when the identifier column is not unique. Uniqueness is assumed, not enforced.
pub(crate) fn check_identifiers(df: &DataFrame) -> Result<()> {
    let ids = df.column(COMMENT_ID)?.as_materialized_series();
    let unique = ids.n_unique()?;
    if unique < ids.len() {
        warn!(
            "'{}' contains {} duplicate identifier(s)",
            COMMENT_ID,
            ids.len() - unique
        );
    }
    Ok(())
}
