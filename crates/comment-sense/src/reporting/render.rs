//! Human-readable terminal rendering of dashboard views.

use crate::types::{DashboardView, Distribution, FilterOptions, LabelColumn, PreviewRow};
use crate::utils::truncate_str;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Render the full dashboard: metrics, three bar charts and the preview table.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "COMMENT DASHBOARD");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out);

    render_metrics(&mut out, view);

    for dist in view.distributions() {
        render_distribution(&mut out, dist);
    }

    render_preview(&mut out, &view.preview);

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out
}

/// Render the values offered by each filter control.
pub fn render_options(options: &FilterOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "FILTERS");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for column in LabelColumn::ALL {
        let values = options.for_column(column);
        let _ = writeln!(out, "  Select {} ({} options)", column.display_name(), values.len());
        for value in values {
            let _ = writeln!(out, "    - {}", value);
        }
    }

    out
}

fn render_metrics(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "KEY METRICS");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (label, value) in view.metrics.labeled() {
        let _ = writeln!(out, "  {:<26} {}", label, value);
    }
    let _ = writeln!(out);
}

fn render_distribution(out: &mut String, dist: &Distribution) {
    let _ = writeln!(out, "{}", dist.title.to_uppercase());
    let _ = writeln!(out, "{}", "-".repeat(40));

    if dist.is_empty() {
        let _ = writeln!(out, "  (no comments match the current filters)");
        let _ = writeln!(out);
        return;
    }

    let max = dist.counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);
    let label_width = dist
        .counts
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    for entry in &dist.counts {
        // Non-zero counts always get at least one block.
        let len = (entry.count * BAR_WIDTH).div_ceil(max);
        let bar: String = std::iter::repeat_n(BAR_CHAR, len).collect();
        let _ = writeln!(
            out,
            "  {:<width$} {} {}",
            truncate_str(&entry.label, 24),
            bar,
            entry.count,
            width = label_width
        );
    }
    let _ = writeln!(out);
}

fn render_preview(out: &mut String, rows: &[PreviewRow]) {
    let _ = writeln!(out, "SAMPLE COMMENTS");
    let _ = writeln!(out, "{}", "-".repeat(40));

    if rows.is_empty() {
        let _ = writeln!(out, "  (no comments match the current filters)");
        let _ = writeln!(out);
        return;
    }

    let _ = writeln!(
        out,
        "{:<12} {:<28} {:<10} {:<10} {:<14}",
        "commentId", "textOriginal", "sentiment", "spam_flag", "category"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<12} {:<28} {:<10} {:<10} {:<14}",
            truncate_str(&row.comment_id, 12),
            truncate_str(&row.text_original.replace('\n', " "), 28),
            truncate_str(&row.sentiment, 10),
            truncate_str(&row.spam_flag, 10),
            truncate_str(&row.category, 14)
        );
    }
    let _ = writeln!(out);
}
