//! Integration tests for the comment dashboard.
//!
//! These tests verify end-to-end behavior from CSV file to dashboard view.

use comment_sense::{
    Dashboard, DashboardConfig, DashboardError, DatasetLoader, FilterSelection, LabelColumn,
    ReportGenerator, SnapshotStore, apply_filters, compute_metrics, compute_quality,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn sample_dashboard() -> Dashboard {
    let config = DashboardConfig::builder()
        .data_path(fixtures_path().join("sample_comments.csv"))
        .build()
        .unwrap();
    let store = SnapshotStore::open(DatasetLoader::from_config(&config)).unwrap();
    Dashboard::new(store.snapshot(), &config).unwrap()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn pairs(
    dashboard: &Dashboard,
    selection: &FilterSelection,
    column: LabelColumn,
) -> Vec<(String, usize)> {
    let view = dashboard.evaluate(selection).unwrap();
    let dist = match column {
        LabelColumn::Sentiment => view.sentiment_distribution,
        LabelColumn::Category => view.category_distribution,
        LabelColumn::SpamFlag => view.spam_distribution,
    };
    dist.counts.into_iter().map(|c| (c.label, c.count)).collect()
}

fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(
        file,
        "commentId,textOriginal,cleaned_text,sentiment,category,spam_flag,likeCount_x"
    )
    .unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

// ============================================================================
// Full Dataset
// ============================================================================

#[test]
fn test_full_selection_metrics() {
    let dashboard = sample_dashboard();
    let view = dashboard.evaluate(&dashboard.default_selection()).unwrap();

    assert_eq!(view.metrics.total, 10);
    assert_eq!(view.metrics.spam_count, 3);
    assert_eq!(view.metrics.quality_count, 3);
    assert_eq!(view.metrics.avg_likes, 6.0);
    assert_eq!(view.metrics.quality_score_pct, 30.0);
}

#[test]
fn test_filter_options_from_file() {
    let dashboard = sample_dashboard();
    let options = dashboard.options();

    assert_eq!(
        options.category,
        vec!["Skincare", "Makeup", "Fragrance", "Haircare", "Uncategorized"]
    );
    assert_eq!(options.sentiment, vec!["Positive", "Neutral", "Negative", "Other"]);
    assert_eq!(options.spam_flag, vec!["Not Spam", "Spam", "Other"]);
}

#[test]
fn test_distributions_are_ordered_and_complete() {
    let dashboard = sample_dashboard();
    let selection = dashboard.default_selection();

    assert_eq!(
        pairs(&dashboard, &selection, LabelColumn::Sentiment),
        vec![
            ("Positive".to_string(), 4),
            ("Neutral".to_string(), 3),
            ("Negative".to_string(), 2),
            ("Other".to_string(), 1),
        ]
    );
    assert_eq!(
        pairs(&dashboard, &selection, LabelColumn::Category),
        vec![
            ("Skincare".to_string(), 4),
            ("Makeup".to_string(), 3),
            ("Fragrance".to_string(), 1),
            ("Uncategorized".to_string(), 1),
            ("Haircare".to_string(), 1),
        ]
    );
    assert_eq!(
        pairs(&dashboard, &selection, LabelColumn::SpamFlag),
        vec![
            ("Not Spam".to_string(), 6),
            ("Spam".to_string(), 3),
            ("Other".to_string(), 1),
        ]
    );
}

#[test]
fn test_quoted_text_survives_loading() {
    let dashboard = sample_dashboard();
    let view = dashboard.evaluate(&dashboard.default_selection()).unwrap();

    assert_eq!(view.preview[0].text_original, "Love this serum, my skin glows!");
    assert_eq!(view.preview[8].text_original, "Too pricey, but \"worth it\"");
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_excluding_spam() {
    let dashboard = sample_dashboard();
    let spam = vec!["Not Spam".to_string(), "Other".to_string()];
    let selection = dashboard.selection_from(None, None, Some(spam.as_slice()));
    let view = dashboard.evaluate(&selection).unwrap();

    assert_eq!(view.metrics.total, 7);
    assert_eq!(view.metrics.spam_count, 0);
    assert_eq!(view.metrics.quality_count, 3);
    assert_eq!(view.metrics.avg_likes, 8.57);
    assert_eq!(view.metrics.quality_score_pct, 42.86);
}

#[test]
fn test_every_distribution_sums_to_total() {
    let dashboard = sample_dashboard();
    let positive = vec!["Positive".to_string()];
    let categories = vec!["makeup".to_string(), "haircare".to_string()];
    let selections = [
        dashboard.default_selection(),
        dashboard.selection_from(Some(positive.as_slice()), None, None),
        dashboard.selection_from(None, Some(categories.as_slice()), None),
        FilterSelection::default(),
    ];

    for selection in &selections {
        let view = dashboard.evaluate(selection).unwrap();
        assert!(view.metrics.quality_count <= view.metrics.total);
        assert!((0.0..=100.0).contains(&view.metrics.quality_score_pct));
        for dist in view.distributions() {
            assert_eq!(dist.total(), view.metrics.total);
        }
    }
}

#[test]
fn test_empty_selection_degrades_gracefully() {
    let dashboard = sample_dashboard();
    let view = dashboard.evaluate(&FilterSelection::default()).unwrap();

    assert_eq!(view.metrics.total, 0);
    assert_eq!(view.metrics.quality_count, 0);
    assert_eq!(view.metrics.spam_count, 0);
    assert_eq!(view.metrics.avg_likes, 0.0);
    assert_eq!(view.metrics.quality_score_pct, 0.0);
    assert!(view.preview.is_empty());
    assert!(view.distributions().iter().all(|d| d.is_empty()));
}

#[test]
fn test_missing_category_is_selectable_as_uncategorized() {
    let dashboard = sample_dashboard();
    let category = vec!["Uncategorized".to_string()];
    let selection = dashboard.selection_from(None, Some(category.as_slice()), None);
    let view = dashboard.evaluate(&selection).unwrap();

    assert_eq!(view.metrics.total, 1);
    assert_eq!(view.preview[0].comment_id, "c006");
}

// ============================================================================
// Two-Row Scenario
// ============================================================================

#[test]
fn test_two_row_scenario() {
    let file = write_csv(&[
        "c1,Great,great,Positive,Skincare,Not Spam,10",
        "c2,Buy now,buy now,Spam,Makeup,Spam,0",
    ]);
    let table = DatasetLoader::new(file.path()).load().unwrap();

    let all = apply_filters(
        &table,
        &set(&["Positive", "Spam"]),
        &set(&["Skincare", "Makeup"]),
        &set(&["Not Spam", "Spam"]),
    )
    .unwrap();
    let quality = compute_quality(&all, &Default::default()).unwrap();
    let metrics = compute_metrics(&all, &quality).unwrap();

    assert_eq!(metrics.total, 2);
    assert_eq!(metrics.spam_count, 1);
    assert_eq!(metrics.quality_count, 1);
    assert_eq!(metrics.avg_likes, 5.0);
    assert_eq!(metrics.quality_score_pct, 50.0);

    let not_spam = apply_filters(
        &table,
        &set(&["Positive", "Spam"]),
        &set(&["Skincare", "Makeup"]),
        &set(&["Not Spam"]),
    )
    .unwrap();
    let quality = compute_quality(&not_spam, &Default::default()).unwrap();
    let metrics = compute_metrics(&not_spam, &quality).unwrap();

    assert_eq!(metrics.total, 1);
    assert_eq!(metrics.spam_count, 0);
    assert_eq!(metrics.quality_score_pct, 100.0);
}

#[test]
fn test_average_likes_round_ties_to_even() {
    let mut rows = vec!["h0,Soft,soft,Positive,Haircare,Not Spam,1".to_string()];
    rows.extend((1..8).map(|i| format!("h{i},Soft,soft,Positive,Haircare,Not Spam,0")));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = write_csv(&rows);

    let config = DashboardConfig::builder().data_path(file.path()).build().unwrap();
    let store = SnapshotStore::open(DatasetLoader::from_config(&config)).unwrap();
    let dashboard = Dashboard::new(store.snapshot(), &config).unwrap();
    let view = dashboard.evaluate(&dashboard.default_selection()).unwrap();

    assert_eq!(view.metrics.total, 8);
    assert_eq!(view.metrics.avg_likes, 0.12);
}

#[test]
fn test_lowercase_reference_categories_still_match() {
    let file = write_csv(&["c1,Nice,nice,Positive,skincare,Not Spam,1"]);
    let config = DashboardConfig::builder()
        .data_path(file.path())
        .quality(comment_sense::QualityRules {
            reference_categories: vec!["skincare".to_string()],
            ..Default::default()
        })
        .build()
        .unwrap();
    let store = SnapshotStore::open(DatasetLoader::from_config(&config)).unwrap();
    let dashboard = Dashboard::new(store.snapshot(), &config).unwrap();
    let view = dashboard.evaluate(&dashboard.default_selection()).unwrap();

    assert_eq!(view.metrics.quality_count, 1);
}

// ============================================================================
// Load Errors
// ============================================================================

#[test]
fn test_missing_columns_are_fatal() {
    let error = DatasetLoader::new(fixtures_path().join("missing_columns.csv"))
        .load()
        .unwrap_err();

    assert!(error.is_load_error());
    assert!(error.to_string().contains("category"));
    assert!(error.to_string().contains("likeCount_x"));
}

#[test]
fn test_missing_file_is_fatal() {
    let error = SnapshotStore::open(DatasetLoader::new(fixtures_path().join("nope.csv")))
        .unwrap_err();
    assert!(matches!(error, DashboardError::FileNotFound(_)));
}

// ============================================================================
// Snapshots and Reports
// ============================================================================

#[test]
fn test_snapshot_shared_across_dashboards() {
    let config = DashboardConfig::builder()
        .data_path(fixtures_path().join("sample_comments.csv"))
        .build()
        .unwrap();
    let store = SnapshotStore::open(DatasetLoader::from_config(&config)).unwrap();

    let first = Dashboard::new(store.snapshot(), &config).unwrap();
    let second = Dashboard::new(store.snapshot(), &config).unwrap();
    assert!(Arc::ptr_eq(first.snapshot(), second.snapshot()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dashboard = first.clone();
            std::thread::spawn(move || {
                dashboard
                    .evaluate(&dashboard.default_selection())
                    .unwrap()
                    .metrics
                    .total
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10);
    }
}

#[test]
fn test_emit_report() {
    let dashboard = sample_dashboard();
    let view = dashboard.evaluate(&dashboard.default_selection()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let report = ReportGenerator::build_report(
        &fixtures_path().join("sample_comments.csv"),
        dashboard.snapshot().len(),
        &view,
    );
    let path = ReportGenerator::new(dir.path().to_path_buf())
        .write_report_to_file(&report, "sample_comments")
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["dataset_rows"], 10);
    assert_eq!(json["metrics"]["total"], 10);
    assert_eq!(json["preview"].as_array().unwrap().len(), 10);
    assert_eq!(json["preview"][0]["commentId"], "c001");
}
