//! CSV reading with fallback strategies.

use crate::error::{DashboardError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// Markers read as missing values in addition to empty fields.
const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read a CSV file into a DataFrame with every column as `String`.
///
/// No dtype is inferred; the loader coerces types itself so a column whose
/// values change shape deep into the file still loads.
///
/// Tries a standard quoted read first; if that fails the raw content is
/// pre-cleaned (collapsed doubled quotes, blank lines dropped) and parsed
/// again. When both fail the first error is reported as
/// [`DashboardError::Parse`].
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(DashboardError::FileNotFound(path.to_path_buf()));
    }

    let parse_error = |reason: String| DashboardError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    if std::fs::metadata(path)?.len() == 0 {
        return Err(parse_error("file is empty".to_string()));
    }

    // Strategy 1: Standard loading with quote handling
    let standard_error = match read_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
            e
        }
    };

    // Strategy 2: Pre-clean content
    let content = std::fs::read_to_string(path)?;
    let cleaned = clean_csv_content(&content);
    if cleaned.is_empty() {
        return Err(parse_error(standard_error.to_string()));
    }

    match read_options()
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
    {
        Ok(df) => {
            warn!(
                "'{}' loaded only after collapsing doubled quotes; text may differ",
                path.display()
            );
            Ok(df)
        }
        Err(e) => {
            debug!("Pre-cleaned loading failed: {}", e);
            Err(parse_error(standard_error.to_string()))
        }
    }
}

fn read_options() -> CsvReadOptions {
    let null_values: Vec<PlSmallStr> = NULL_MARKERS.iter().map(|m| PlSmallStr::from(*m)).collect();

    CsvReadOptions::default()
        .with_infer_schema_length(Some(0))
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(NullValues::AllColumns(null_values))),
        )
}

/// Clean CSV content
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
