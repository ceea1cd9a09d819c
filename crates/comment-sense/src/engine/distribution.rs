//! Per-column frequency counts.

use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::{Distribution, LabelColumn, LabelCount};
use crate::utils::MISSING_LABEL;
use std::collections::HashMap;

/// Count label occurrences in one column of a view.
///
/// Ordered by descending count; labels with equal counts keep the order in
/// which they first appear in the view. Missing values (only possible in
/// tables that bypassed normalization) are counted under [`MISSING_LABEL`] so
/// the counts always sum to the view's row count.
pub fn value_counts(view: &CommentTable, column: LabelColumn) -> Result<Vec<LabelCount>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for val in view.labels(column)?.into_iter() {
        let label = val.unwrap_or(MISSING_LABEL);
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(LabelCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}

/// Titled distribution for one of the dashboard charts.
pub fn distribution(view: &CommentTable, column: LabelColumn) -> Result<Distribution> {
    let title = match column {
        LabelColumn::Sentiment => "Sentiment Distribution",
        LabelColumn::SpamFlag => "Spam vs Not Spam",
        LabelColumn::Category => "Comment Categories",
    };

    Ok(Distribution {
        title: title.to_string(),
        column,
        counts: value_counts(view, column)?,
    })
}
