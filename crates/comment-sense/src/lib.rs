//! Comment Dashboard Library
//!
//! A filter-and-aggregate engine for annotated social-media comments, built
//! with Rust and Polars.
//!
//! # Overview
//!
//! The dataset is a CSV of comments, each pre-labeled with a sentiment, a
//! spam flag and a topical category. This library provides:
//!
//! - **Loading**: CSV reading, column contract validation, label normalization
//! - **Snapshots**: the loaded table is immutable and shared by `Arc` until an
//!   explicit refresh
//! - **Filtering**: three independent multi-select filters (sentiment,
//!   category, spam flag)
//! - **Aggregation**: quality subset, five scalar metrics, per-column
//!   frequency distributions and a preview table
//! - **Reporting**: terminal rendering and JSON reports
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use comment_sense::{Dashboard, DashboardConfig, DatasetLoader, SnapshotStore};
//!
//! let config = DashboardConfig::builder()
//!     .data_path("sample_comments.csv")
//!     .build()?;
//!
//! let store = SnapshotStore::open(DatasetLoader::from_config(&config))?;
//! let dashboard = Dashboard::new(store.snapshot(), &config)?;
//!
//! // Everything selected, as on first load
//! let view = dashboard.evaluate(&dashboard.default_selection())?;
//! println!("{} comments, quality score {}%",
//!     view.metrics.total, view.metrics.quality_score_pct);
//!
//! // Only comments that are not spam
//! let not_spam = vec!["Not Spam".to_string()];
//! let selection = dashboard.selection_from(None, None, Some(not_spam.as_slice()));
//! let view = dashboard.evaluate(&selection)?;
//! ```
//!
//! # Label Normalization
//!
//! Missing sentiment and spam labels become `Other`, missing categories
//! become `Uncategorized`, and all categories are title-cased at load time.
//! Category values supplied by users and the quality predicate's reference
//! categories are title-cased the same way, so comparisons are exact.

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod reporting;
pub mod session;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{ConfigValidationError, DashboardConfig, DashboardConfigBuilder, QualityRules};
pub use engine::{
    Dashboard, QualityPredicate, apply_filters, apply_selection, compute_metrics, compute_quality,
    filter_options, value_counts,
};
pub use error::{DashboardError, Result as DashboardResult, ResultExt};
pub use loader::{CommentTable, DatasetLoader, SnapshotStore};
pub use reporting::{DashboardReport, ReportGenerator, render_dashboard, render_options};
pub use session::{Command, Session};
pub use types::{
    DashboardView, Distribution, FilterOptions, FilterSelection, LabelColumn, LabelCount, Metrics,
    PreviewRow,
};
