use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Column Contract
// ============================================================================

pub const COMMENT_ID: &str = "commentId";
pub const TEXT_ORIGINAL: &str = "textOriginal";
pub const CLEANED_TEXT: &str = "cleaned_text";
pub const SENTIMENT: &str = "sentiment";
pub const CATEGORY: &str = "category";
pub const SPAM_FLAG: &str = "spam_flag";
pub const LIKE_COUNT: &str = "likeCount_x";

/// Columns every source table must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COMMENT_ID,
    TEXT_ORIGINAL,
    CLEANED_TEXT,
    SENTIMENT,
    CATEGORY,
    SPAM_FLAG,
    LIKE_COUNT,
];

/// Columns shown in the preview table, in display order.
pub const PREVIEW_COLUMNS: [&str; 6] = [
    COMMENT_ID,
    TEXT_ORIGINAL,
    CLEANED_TEXT,
    SENTIMENT,
    SPAM_FLAG,
    CATEGORY,
];

/// Spam flag value counted by the spam metric.
pub const SPAM_LABEL: &str = "Spam";

/// One of the three categorical label columns a user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColumn {
    Sentiment,
    Category,
    SpamFlag,
}

impl LabelColumn {
    pub const ALL: [LabelColumn; 3] = [
        LabelColumn::Sentiment,
        LabelColumn::Category,
        LabelColumn::SpamFlag,
    ];

    /// Name of the backing column in the source table.
    pub fn column_name(&self) -> &'static str {
        match self {
            LabelColumn::Sentiment => SENTIMENT,
            LabelColumn::Category => CATEGORY,
            LabelColumn::SpamFlag => SPAM_FLAG,
        }
    }

    /// Human-readable name for filter controls.
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelColumn::Sentiment => "Sentiment",
            LabelColumn::Category => "Category",
            LabelColumn::SpamFlag => "Spam/Not Spam",
        }
    }

    /// Fallback label assigned to missing values at load time.
    pub fn missing_fallback(&self) -> &'static str {
        match self {
            LabelColumn::Category => "Uncategorized",
            LabelColumn::Sentiment | LabelColumn::SpamFlag => "Other",
        }
    }

    /// Parse the keyword used on the command line and in interactive sessions.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "sentiment" => Some(LabelColumn::Sentiment),
            "category" => Some(LabelColumn::Category),
            "spam" | "spam_flag" => Some(LabelColumn::SpamFlag),
            _ => None,
        }
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ============================================================================
// Engine Outputs
// ============================================================================

/// Occurrences of one label within a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Frequency distribution of a label column, ordered by descending count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub title: String,
    pub column: LabelColumn,
    pub counts: Vec<LabelCount>,
}

impl Distribution {
    /// Sum of all counts; equals the number of rows in the view.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Scalar metrics over a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: usize,
    pub quality_count: usize,
    pub spam_count: usize,
    /// Mean like count, rounded to two decimals; 0.0 when there is no data.
    pub avg_likes: f64,
    /// `100 * quality_count / total`, rounded to two decimals; 0.0 when `total == 0`.
    pub quality_score_pct: f64,
}

impl Metrics {
    /// Metric labels paired with display values, in dashboard order.
    pub fn labeled(&self) -> [(&'static str, String); 5] {
        [
            ("Total Comments", self.total.to_string()),
            ("Quality Comments", self.quality_count.to_string()),
            ("Spam Comments", self.spam_count.to_string()),
            ("Avg Likes (per comment)", format!("{}", self.avg_likes)),
            ("Quality Score (%)", format!("{}%", self.quality_score_pct)),
        ]
    }
}

/// One row of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    #[serde(rename = "commentId")]
    pub comment_id: String,
    #[serde(rename = "textOriginal")]
    pub text_original: String,
    pub cleaned_text: String,
    pub sentiment: String,
    pub spam_flag: String,
    pub category: String,
}

/// Values offered by each filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub sentiment: Vec<String>,
    pub category: Vec<String>,
    pub spam_flag: Vec<String>,
}

impl FilterOptions {
    pub fn for_column(&self, column: LabelColumn) -> &[String] {
        match column {
            LabelColumn::Sentiment => &self.sentiment,
            LabelColumn::Category => &self.category,
            LabelColumn::SpamFlag => &self.spam_flag,
        }
    }
}

/// The three sets of allowed label values.
///
/// An empty set matches nothing; there is no implicit "select all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub sentiment: BTreeSet<String>,
    pub category: BTreeSet<String>,
    pub spam_flag: BTreeSet<String>,
}

impl FilterSelection {
    pub fn allowed_mut(&mut self, column: LabelColumn) -> &mut BTreeSet<String> {
        match column {
            LabelColumn::Sentiment => &mut self.sentiment,
            LabelColumn::Category => &mut self.category,
            LabelColumn::SpamFlag => &mut self.spam_flag,
        }
    }
}

/// Everything the presentation layer renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub metrics: Metrics,
    pub sentiment_distribution: Distribution,
    pub spam_distribution: Distribution,
    pub category_distribution: Distribution,
    pub preview: Vec<PreviewRow>,
}

impl DashboardView {
    pub fn distributions(&self) -> [&Distribution; 3] {
        [
            &self.sentiment_distribution,
            &self.spam_distribution,
            &self.category_distribution,
        ]
    }
}
