//! Filter and aggregation engine.
//!
//! Every operation here is a pure function of a [`CommentTable`] and a
//! [`FilterSelection`]:
//! - [`apply_filters`] builds the filtered view
//! - [`compute_quality`] restricts it to quality comments
//! - [`compute_metrics`] derives the five scalar metrics
//! - [`value_counts`] produces per-column frequency counts
//! - [`preview`] returns the first rows for the preview table
//!
//! [`Dashboard`] ties them together for one snapshot.

mod distribution;
mod filter;
mod metrics;
mod preview;
mod quality;

pub use distribution::{distribution, value_counts};
pub use filter::{allowed_values, apply_filters, apply_selection, filter_options, select_all};
pub use metrics::compute_metrics;
pub use preview::preview;
pub use quality::{QualityPredicate, compute_quality};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::loader::CommentTable;
use crate::types::{DashboardView, FilterOptions, FilterSelection, LabelColumn};
use std::sync::Arc;
use tracing::debug;

/// The dashboard for one dataset snapshot.
///
/// Filter options are computed once per snapshot; [`Dashboard::evaluate`]
/// recomputes everything else from scratch for each selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: Arc<CommentTable>,
    options: FilterOptions,
    quality: QualityPredicate,
    preview_rows: usize,
}

impl Dashboard {
    pub fn new(snapshot: Arc<CommentTable>, config: &DashboardConfig) -> Result<Self> {
        let options = filter_options(&snapshot, &config.priority_categories)?;
        Ok(Self {
            snapshot,
            options,
            quality: QualityPredicate::from_rules(&config.quality),
            preview_rows: config.preview_rows,
        })
    }

    pub fn snapshot(&self) -> &Arc<CommentTable> {
        &self.snapshot
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// The initial selection: every observed value allowed.
    pub fn default_selection(&self) -> FilterSelection {
        select_all(&self.options)
    }

    /// Build a selection from optional per-column values.
    ///
    /// `None` keeps every observed value for that column; `Some(values)`
    /// restricts it to `values`, which may be empty.
    pub fn selection_from(
        &self,
        sentiment: Option<&[String]>,
        category: Option<&[String]>,
        spam_flag: Option<&[String]>,
    ) -> FilterSelection {
        let mut selection = self.default_selection();
        for (column, values) in [
            (LabelColumn::Sentiment, sentiment),
            (LabelColumn::Category, category),
            (LabelColumn::SpamFlag, spam_flag),
        ] {
            if let Some(values) = values {
                *selection.allowed_mut(column) = allowed_values(column, values);
            }
        }
        selection
    }

    /// Evaluate a selection into everything the presentation layer renders.
    pub fn evaluate(&self, selection: &FilterSelection) -> Result<DashboardView> {
        let view = apply_selection(&self.snapshot, selection)?;
        let quality = compute_quality(&view, &self.quality)?;
        let metrics = compute_metrics(&view, &quality)?;

        debug!(
            "Evaluated selection: {} comments, {} quality",
            metrics.total, metrics.quality_count
        );

        Ok(DashboardView {
            selection: selection.clone(),
            metrics,
            sentiment_distribution: distribution(&view, LabelColumn::Sentiment)?,
            spam_distribution: distribution(&view, LabelColumn::SpamFlag)?,
            category_distribution: distribution(&view, LabelColumn::Category)?,
            preview: preview(&view, self.preview_rows)?,
        })
    }
}
