//! Filter options, selections and the multi-column filter.

use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::{FilterOptions, FilterSelection, LabelColumn};
use crate::utils::{title_case, unique_in_order};
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// Collect the values offered by each filter control.
///
/// Sentiment and spam-flag options keep first-appearance order. Category
/// options list the observed priority categories first, in the given order,
/// followed by the remaining categories sorted lexicographically.
pub fn filter_options(
    table: &CommentTable,
    priority_categories: &[String],
) -> Result<FilterOptions> {
    let sentiment = unique_in_order(table.labels(LabelColumn::Sentiment)?);
    let spam_flag = unique_in_order(table.labels(LabelColumn::SpamFlag)?);

    let observed = unique_in_order(table.labels(LabelColumn::Category)?);
    let priority: Vec<String> = priority_categories
        .iter()
        .map(|c| title_case(c))
        .filter(|c| observed.contains(c))
        .fold(Vec::new(), |mut acc, c| {
            if !acc.contains(&c) {
                acc.push(c);
            }
            acc
        });

    let mut rest: Vec<String> = observed
        .into_iter()
        .filter(|c| !priority.contains(c))
        .collect();
    rest.sort();

    let mut category = priority;
    category.extend(rest);

    Ok(FilterOptions {
        sentiment,
        category,
        spam_flag,
    })
}

/// Selection with every offered value allowed (the initial state).
pub fn select_all(options: &FilterOptions) -> FilterSelection {
    FilterSelection {
        sentiment: options.sentiment.iter().cloned().collect(),
        category: options.category.iter().cloned().collect(),
        spam_flag: options.spam_flag.iter().cloned().collect(),
    }
}

/// Build the allowed set for one column from user-supplied values.
///
/// Values are trimmed and blank entries dropped. Category values are
/// title-cased so they compare equal to the normalized table labels.
pub fn allowed_values<I, S>(column: LabelColumn, values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| match column {
            LabelColumn::Category => title_case(&v),
            LabelColumn::Sentiment | LabelColumn::SpamFlag => v,
        })
        .collect()
}

/// Keep rows whose sentiment, category and spam flag are each in the
/// corresponding allowed set.
///
/// An empty set allows nothing, so any empty set yields an empty view.
pub fn apply_filters(
    table: &CommentTable,
    sentiment: &BTreeSet<String>,
    category: &BTreeSet<String>,
    spam_flag: &BTreeSet<String>,
) -> Result<CommentTable> {
    let sentiments = table.labels(LabelColumn::Sentiment)?;
    let categories = table.labels(LabelColumn::Category)?;
    let spam_flags = table.labels(LabelColumn::SpamFlag)?;

    let mask_values: Vec<bool> = sentiments
        .into_iter()
        .zip(categories.into_iter())
        .zip(spam_flags.into_iter())
        .map(|((s, c), f)| {
            is_allowed(s, sentiment) && is_allowed(c, category) && is_allowed(f, spam_flag)
        })
        .collect();

    let mask = BooleanChunked::from_slice("mask".into(), &mask_values);
    let filtered = table.frame().filter(&mask)?;

    debug!("Filtered {} -> {} comments", table.len(), filtered.height());
    Ok(CommentTable::derived(filtered))
}

/// [`apply_filters`] with the three sets taken from a selection.
pub fn apply_selection(table: &CommentTable, selection: &FilterSelection) -> Result<CommentTable> {
    apply_filters(
        table,
        &selection.sentiment,
        &selection.category,
        &selection.spam_flag,
    )
}

fn is_allowed(value: Option<&str>, allowed: &BTreeSet<String>) -> bool {
    value.is_some_and(|v| allowed.contains(v))
}
