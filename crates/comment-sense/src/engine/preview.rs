//! Preview table rows.

use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::PREVIEW_COLUMNS;
use crate::types::PreviewRow;
use crate::utils::string_column;
use polars::prelude::*;

/// First `limit` rows of a view, restricted to the preview columns.
pub fn preview(view: &CommentTable, limit: usize) -> Result<Vec<PreviewRow>> {
    let head = view.frame().head(Some(limit));

    let columns = PREVIEW_COLUMNS
        .iter()
        .map(|name| string_column(&head, name))
        .collect::<Result<Vec<&StringChunked>>>()?;

    let cell = |column: usize, row: usize| -> String {
        columns[column].get(row).unwrap_or_default().to_string()
    };

    let rows = (0..head.height())
        .map(|row| PreviewRow {
            comment_id: cell(0, row),
            text_original: cell(1, row),
            cleaned_text: cell(2, row),
            sentiment: cell(3, row),
            spam_flag: cell(4, row),
            category: cell(5, row),
        })
        .collect();

    Ok(rows)
}
