//! Scalar metrics over a filtered view.

use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::{LabelColumn, Metrics, SPAM_LABEL};
use crate::utils::round_to;
use polars::prelude::*;

/// Compute the five dashboard metrics.
///
/// An empty view yields all zeros; neither the mean nor the percentage
/// divides by zero.
pub fn compute_metrics(view: &CommentTable, quality: &CommentTable) -> Result<Metrics> {
    let total = view.len();
    let quality_count = quality.len();

    let spam_count = view
        .labels(LabelColumn::SpamFlag)?
        .into_iter()
        .filter(|f| *f == Some(SPAM_LABEL))
        .count();

    let avg_likes = view
        .like_counts()?
        .mean()
        .filter(|mean| mean.is_finite())
        .map(|mean| round_to(mean, 2))
        .unwrap_or(0.0);

    let quality_score_pct = if total > 0 {
        round_to(quality_count as f64 / total as f64 * 100.0, 2)
    } else {
        0.0
    };

    Ok(Metrics {
        total,
        quality_count,
        spam_count,
        avg_likes,
        quality_score_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::sample_table;
    use crate::engine::{QualityPredicate, apply_selection, compute_quality};
    use crate::types::FilterSelection;

    #[test]
    fn test_metrics_on_sample() {
        let table = sample_table();
        let quality = compute_quality(&table, &QualityPredicate::default()).unwrap();
        let metrics = compute_metrics(&table, &quality).unwrap();

        assert_eq!(metrics.total, 6);
        assert_eq!(metrics.quality_count, 2);
        assert_eq!(metrics.spam_count, 2);
        // The missing like count is skipped: (10 + 0 + 4 + 2 + 7) / 5
        assert_eq!(metrics.avg_likes, 4.6);
        assert_eq!(metrics.quality_score_pct, 33.33);
    }

    #[test]
    fn test_metrics_on_empty_view() {
        let table = sample_table();
        let empty = apply_selection(&table, &FilterSelection::default()).unwrap();
        let quality = compute_quality(&empty, &QualityPredicate::default()).unwrap();
        let metrics = compute_metrics(&empty, &quality).unwrap();

        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.quality_count, 0);
        assert_eq!(metrics.spam_count, 0);
        assert_eq!(metrics.avg_likes, 0.0);
        assert_eq!(metrics.quality_score_pct, 0.0);
    }
}
