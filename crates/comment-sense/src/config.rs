//! Configuration types for the comment dashboard.
//!
//! This module provides configuration options using the builder pattern.
//! The dataset location is always injected (flag, environment or `.env`);
//! nothing machine-specific is compiled in.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dataset file, resolved relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "sample_comments.csv";

/// Environment variable consulted for the dataset location.
pub const DATA_PATH_ENV: &str = "COMMENTSENSE_DATA";

/// Default number of rows shown in the preview table.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Rules describing which filtered comments count as "quality" comments.
///
/// A comment is a quality comment when its spam flag equals
/// [`not_spam_label`](Self::not_spam_label), its sentiment is one of
/// [`accepted_sentiments`](Self::accepted_sentiments) and its category is one
/// of [`reference_categories`](Self::reference_categories).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRules {
    pub not_spam_label: String,
    pub accepted_sentiments: Vec<String>,
    pub reference_categories: Vec<String>,
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            not_spam_label: "Not Spam".to_string(),
            accepted_sentiments: vec!["Positive".to_string(), "Neutral".to_string()],
            reference_categories: vec![
                "Skincare".to_string(),
                "Fragrance".to_string(),
                "Makeup".to_string(),
            ],
        }
    }
}

/// Configuration for the dashboard.
///
/// Use [`DashboardConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use comment_sense::config::DashboardConfig;
///
/// let config = DashboardConfig::builder()
///     .data_path("data/comments.csv")
///     .preview_rows(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Location of the comment CSV.
    /// Default: "sample_comments.csv"
    pub data_path: PathBuf,

    /// Maximum number of rows in the preview table.
    /// Default: 20
    pub preview_rows: usize,

    /// Categories listed first among the category filter options.
    /// Default: Skincare, Makeup, Fragrance
    pub priority_categories: Vec<String>,

    /// Quality subset rules.
    pub quality: QualityRules,

    /// Output directory for JSON reports.
    /// Default: "outputs"
    pub output_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            priority_categories: default_priority_categories(),
            quality: QualityRules::default(),
            output_dir: PathBuf::from("outputs"),
        }
    }
}

fn default_priority_categories() -> Vec<String> {
    vec![
        "Skincare".to_string(),
        "Makeup".to_string(),
        "Fragrance".to_string(),
    ]
}

impl DashboardConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDataPath);
        }

        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows(self.preview_rows));
        }

        if self.quality.not_spam_label.trim().is_empty() {
            return Err(ConfigValidationError::EmptyQualityRule(
                "not_spam_label".to_string(),
            ));
        }

        if self.quality.accepted_sentiments.is_empty() {
            return Err(ConfigValidationError::EmptyQualityRule(
                "accepted_sentiments".to_string(),
            ));
        }

        if self.quality.reference_categories.is_empty() {
            return Err(ConfigValidationError::EmptyQualityRule(
                "reference_categories".to_string(),
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Dataset path must not be empty")]
    EmptyDataPath,

    #[error("Invalid preview rows: {0} (must be at least 1)")]
    InvalidPreviewRows(usize),

    #[error("Quality rule '{0}' must not be empty")]
    EmptyQualityRule(String),
}

/// Builder for [`DashboardConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    data_path: Option<PathBuf>,
    preview_rows: Option<usize>,
    priority_categories: Option<Vec<String>>,
    quality: Option<QualityRules>,
    output_dir: Option<PathBuf>,
}

impl DashboardConfigBuilder {
    /// Set the dataset location.
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Set the maximum number of preview rows.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set the categories listed first among the category filter options.
    pub fn priority_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the quality subset rules.
    pub fn quality(mut self, rules: QualityRules) -> Self {
        self.quality = Some(rules);
        self
    }

    /// Set the output directory for JSON reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `DashboardConfig` or an error if validation fails.
    pub fn build(self) -> Result<DashboardConfig, ConfigValidationError> {
        let config = DashboardConfig {
            data_path: self
                .data_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            preview_rows: self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS),
            priority_categories: self
                .priority_categories
                .unwrap_or_else(default_priority_categories),
            quality: self.quality.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("outputs")),
        };

        config.validate()?;
        Ok(config)
    }
}
