//! Report generation module.
//!
//! This module turns a [`DashboardView`](crate::types::DashboardView) into
//! output:
//! - a human-readable terminal dashboard ([`render_dashboard`])
//! - JSON on stdout or a JSON report file ([`DashboardReport`])
//!
//! # Example
//!
//! ```rust,ignore
//! use comment_sense::reporting::{ReportGenerator, render_dashboard};
//!
//! println!("{}", render_dashboard(&view));
//!
//! let report = ReportGenerator::build_report(&data_path, snapshot.len(), &view);
//! let generator = ReportGenerator::new(PathBuf::from("outputs"));
//! generator.write_report_to_file(&report, "sample_comments")?;
//! ```

mod generator;
mod render;

pub use generator::{DashboardReport, ReportGenerator, file_stem};
pub use render::{render_dashboard, render_options};
