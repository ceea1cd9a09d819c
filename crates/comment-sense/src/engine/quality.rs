//! Quality subset predicate.

use crate::config::QualityRules;
use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::LabelColumn;
use crate::utils::title_case;
use polars::prelude::*;
use std::collections::BTreeSet;

/// Compiled form of [`QualityRules`].
///
/// Reference categories are title-cased once here so they compare exactly
/// against the normalized category labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityPredicate {
    not_spam_label: String,
    sentiments: BTreeSet<String>,
    categories: BTreeSet<String>,
}

impl QualityPredicate {
    pub fn from_rules(rules: &QualityRules) -> Self {
        Self {
            not_spam_label: rules.not_spam_label.clone(),
            sentiments: rules.accepted_sentiments.iter().cloned().collect(),
            categories: rules
                .reference_categories
                .iter()
                .map(|c| title_case(c))
                .collect(),
        }
    }

    /// Whether a single comment's labels satisfy the predicate.
    pub fn matches(&self, sentiment: &str, category: &str, spam_flag: &str) -> bool {
        spam_flag == self.not_spam_label
            && self.sentiments.contains(sentiment)
            && self.categories.contains(category)
    }

    pub fn reference_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }
}

impl Default for QualityPredicate {
    fn default() -> Self {
        Self::from_rules(&QualityRules::default())
    }
}

/// Restrict a filtered view to its quality comments.
pub fn compute_quality(view: &CommentTable, predicate: &QualityPredicate) -> Result<CommentTable> {
    let sentiments = view.labels(LabelColumn::Sentiment)?;
    let categories = view.labels(LabelColumn::Category)?;
    let spam_flags = view.labels(LabelColumn::SpamFlag)?;

    let mask_values: Vec<bool> = sentiments
        .into_iter()
        .zip(categories.into_iter())
        .zip(spam_flags.into_iter())
        .map(|((s, c), f)| match (s, c, f) {
            (Some(s), Some(c), Some(f)) => predicate.matches(s, c, f),
            _ => false,
        })
        .collect();

    let mask = BooleanChunked::from_slice("mask".into(), &mask_values);
    Ok(CommentTable::derived(view.frame().filter(&mask)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::sample_table;

    #[test]
    fn test_default_predicate() {
        let predicate = QualityPredicate::default();
        assert!(predicate.matches("Positive", "Skincare", "Not Spam"));
        assert!(predicate.matches("Neutral", "Fragrance", "Not Spam"));
        assert!(!predicate.matches("Negative", "Skincare", "Not Spam"));
        assert!(!predicate.matches("Positive", "Haircare", "Not Spam"));
        assert!(!predicate.matches("Positive", "Makeup", "Spam"));
        assert!(!predicate.matches("Positive", "Makeup", "Other"));
    }

    #[test]
    fn test_reference_categories_are_title_cased() {
        let rules = QualityRules {
            reference_categories: vec!["skincare".to_string(), "MAKEUP".to_string()],
            ..QualityRules::default()
        };
        let predicate = QualityPredicate::from_rules(&rules);
        assert!(predicate.reference_categories().contains("Skincare"));
        assert!(predicate.reference_categories().contains("Makeup"));
        assert!(predicate.matches("Positive", "Skincare", "Not Spam"));
    }

    #[test]
    fn test_compute_quality_on_sample() {
        let table = sample_table();
        let quality = compute_quality(&table, &QualityPredicate::default()).unwrap();
        assert_eq!(quality.len(), 2);
        assert!(quality.len() <= table.len());
    }

    #[test]
    fn test_compute_quality_on_empty_view() {
        let table = sample_table();
        let empty = crate::engine::apply_selection(&table, &Default::default()).unwrap();
        let quality = compute_quality(&empty, &QualityPredicate::default()).unwrap();
        assert!(quality.is_empty());
    }
}
