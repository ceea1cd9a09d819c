//! Dataset loading.
//!
//! This module turns a CSV file into an immutable [`CommentTable`]:
//! - CSV reading with fallback strategies
//! - Column contract validation (all required columns must be present)
//! - Type coercion (text and labels as strings, like counts as floats)
//! - Label normalization (missing labels replaced, categories title-cased)
//!
//! The loaded table is held by a [`SnapshotStore`] and shared by `Arc`
//! across every evaluation until an explicit refresh.

mod normalize;
mod reader;
mod snapshot;

pub use snapshot::SnapshotStore;

use crate::config::DashboardConfig;
use crate::error::{Result, ResultExt};
use crate::types::{LIKE_COUNT, LabelColumn};
use crate::utils::string_column;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// A validated, normalized table of comment records.
///
/// Both the full dataset and every filtered view are `CommentTable`s; a view
/// is just a table holding fewer rows.
#[derive(Debug, Clone)]
pub struct CommentTable {
    df: DataFrame,
}

impl CommentTable {
    /// Build a table from an in-memory frame.
    ///
    /// Applies the same column contract, type coercion and label
    /// normalization as loading from disk.
    pub fn from_frame(df: DataFrame) -> Result<Self> {
        normalize::validate_columns(&df)?;
        let df = normalize::coerce_types(df)?;
        let df = normalize::normalize_labels(df)?;
        normalize::check_identifiers(&df)?;
        Ok(Self { df })
    }

    /// Wrap a frame derived from an existing table (e.g. a filtered view).
    pub(crate) fn derived(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of comment records.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Borrow one of the label columns.
    pub fn labels(&self, column: LabelColumn) -> Result<&StringChunked> {
        string_column(&self.df, column.column_name())
    }

    /// Borrow the like-count column.
    pub fn like_counts(&self) -> Result<&Float64Chunked> {
        Ok(self.df.column(LIKE_COUNT)?.as_materialized_series().f64()?)
    }
}

/// Loader for the comment dataset.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.data_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, validate and normalize the dataset.
    pub fn load(&self) -> Result<CommentTable> {
        info!("Loading dataset from: {}", self.path.display());

        let df = reader::read_csv(&self.path)?;
        let table = CommentTable::from_frame(df)
            .context(format!("While loading '{}'", self.path.display()))?;

        info!("Dataset loaded successfully: {} comments", table.len());
        Ok(table)
    }
}
