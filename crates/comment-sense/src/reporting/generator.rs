use crate::error::Result;
use crate::types::DashboardView;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Machine-readable dashboard output.
///
/// Used for JSON on stdout (`--json`) and for report files (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: String,
    pub input_file: String,
    /// Rows in the loaded dataset before filtering.
    pub dataset_rows: usize,
    #[serde(flatten)]
    pub view: DashboardView,
}

pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn build_report(
        input_file: &Path,
        dataset_rows: usize,
        view: &DashboardView,
    ) -> DashboardReport {
        DashboardReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.display().to_string(),
            dataset_rows,
            view: view.clone(),
        }
    }

    /// Write a report to a JSON file.
    ///
    /// The file is named `<report_base_name>_dashboard.json` inside the output
    /// directory, which is created if needed.
    pub fn write_report_to_file(
        &self,
        report: &DashboardReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_dashboard.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

/// Extract the file stem (name without extension) from a path.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dashboard")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Distribution, FilterSelection, LabelColumn, Metrics};

    fn empty_view() -> DashboardView {
        let dist = |column| Distribution {
            title: "t".to_string(),
            column,
            counts: Vec::new(),
        };
        DashboardView {
            selection: FilterSelection::default(),
            metrics: Metrics {
                total: 0,
                quality_count: 0,
                spam_count: 0,
                avg_likes: 0.0,
                quality_score_pct: 0.0,
            },
            sentiment_distribution: dist(LabelColumn::Sentiment),
            spam_distribution: dist(LabelColumn::SpamFlag),
            category_distribution: dist(LabelColumn::Category),
            preview: Vec::new(),
        }
    }

    #[test]
    fn test_report_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path().join("reports"));
        let report =
            ReportGenerator::build_report(Path::new("data/sample_comments.csv"), 12, &empty_view());

        let path = generator.write_report_to_file(&report, "sample_comments").unwrap();
        assert!(path.ends_with("sample_comments_dashboard.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["dataset_rows"], 12);
        assert_eq!(json["metrics"]["quality_score_pct"], 0.0);
        assert_eq!(json["input_file"], "data/sample_comments.csv");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("data/sample_comments.csv")), "sample_comments");
        assert_eq!(file_stem(Path::new("")), "dashboard");
    }
}
