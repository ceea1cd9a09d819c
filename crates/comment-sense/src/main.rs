//! CLI entry point for the comment dashboard.

use anyhow::{Context, Result};
use clap::Parser;
use comment_sense::config::{DATA_PATH_ENV, DEFAULT_DATA_PATH};
use comment_sense::reporting::file_stem;
use comment_sense::{
    Dashboard, DashboardConfig, DashboardView, DatasetLoader, ReportGenerator, Session,
    SnapshotStore, render_dashboard, render_options,
};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Dashboard for annotated social-media comments",
    long_about = "Loads a CSV of comments pre-labeled with sentiment, spam flag and category,\n\
                  filters it and reports metrics, distributions and a preview.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  COMMENTSENSE_DATA    Dataset location (also read from .env)\n\n\
                  EXAMPLES:\n  \
                  # Full dataset\n  \
                  comment-sense --data sample_comments.csv\n\n  \
                  # Positive and neutral skincare comments that are not spam\n  \
                  comment-sense --sentiment Positive,Neutral --category skincare --spam 'Not Spam'\n\n  \
                  # Interactive session\n  \
                  comment-sense --interactive"
)]
struct Args {
    /// Path to the comment CSV
    #[arg(short, long, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Allowed sentiment values (omit for all, pass the flag alone for none)
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    sentiment: Option<Vec<String>>,

    /// Allowed categories (case-insensitive; omit for all, pass the flag alone for none)
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    category: Option<Vec<String>>,

    /// Allowed spam flags (omit for all, pass the flag alone for none)
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    spam: Option<Vec<String>>,

    /// Number of rows in the preview table
    #[arg(long, default_value = "20")]
    preview_rows: usize,

    /// List the filter options and exit
    #[arg(long)]
    list_options: bool,

    /// Start an interactive session reading commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output JSON to stdout instead of the terminal dashboard
    ///
    /// Disables all logging so stdout only contains JSON.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <data_name>_dashboard.json
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress informational logging (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // .env must be loaded before clap reads COMMENTSENSE_DATA
    dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = DashboardConfig::builder()
        .data_path(&args.data)
        .preview_rows(args.preview_rows)
        .output_dir(&args.output)
        .build()?;

    let store = SnapshotStore::open(DatasetLoader::from_config(&config)).map_err(|e| {
        error!("Failed to load dataset: {}", e);
        e
    })?;

    if args.interactive {
        info!("Starting interactive session (type 'help' for commands)");
        let mut session = Session::new(&store, &config)?.with_json_output(args.json);
        let stdin = std::io::stdin();
        session.run(stdin.lock(), std::io::stdout())?;
        return Ok(());
    }

    let dashboard = Dashboard::new(store.snapshot(), &config)?;

    if args.list_options {
        if args.json {
            println!("{}", serde_json::to_string_pretty(dashboard.options())?);
        } else {
            print!("{}", render_options(dashboard.options()));
        }
        return Ok(());
    }

    let selection = dashboard.selection_from(
        args.sentiment.as_deref(),
        args.category.as_deref(),
        args.spam.as_deref(),
    );
    let view = dashboard.evaluate(&selection)?;

    handle_output(&args, &config, &store, &view)
}

/// Handle dashboard output based on CLI flags.
///
/// - Default: print the terminal dashboard
/// - `--json`: print JSON to stdout only
/// - `--emit-report`: additionally write a JSON report file
fn handle_output(
    args: &Args,
    config: &DashboardConfig,
    store: &SnapshotStore,
    view: &DashboardView,
) -> Result<()> {
    let report = ReportGenerator::build_report(store.source(), store.snapshot().len(), view);

    if args.emit_report {
        let generator = ReportGenerator::new(config.output_dir.clone());
        let path = generator
            .write_report_to_file(&report, &file_stem(store.source()))
            .context("Failed to write report")?;
        info!("Report written to: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_dashboard(view));
    Ok(())
}
