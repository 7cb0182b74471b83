//! Stats command implementation.
//!
//! The stats command:
//! 1. Loads the blog export
//! 2. Computes every aggregate
//! 3. Writes the JSON report (or prints it)
//! 4. Optionally prints a text summary

use super::models::StatsArgs;
use crate::aggregator::summarize;
use crate::output::{generate_text_summary, report_to_string, validate_path, write_report};
use crate::parser::{load_blogs, to_report, StatsReport};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written or printed
///
/// # Errors
/// * Blog export missing or malformed
/// * Report write errors
pub fn execute_stats(args: &StatsArgs) -> Result<StatsReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading blogs from {}...", args.input.display());
    let blogs = load_blogs(&args.input)
        .with_context(|| format!("Failed to load blogs from {}", args.input.display()))?;

    debug!("Loaded {} blogs", blogs.len());

    info!("Step 2/3: Computing statistics...");
    let stats = summarize(&blogs);
    let report = to_report(&args.input.display().to_string(), stats);

    info!(
        "{} blogs, {} likes in total",
        report.blog_count, report.total_likes
    );

    info!("Step 3/3: Writing output...");
    match &args.output_json {
        Some(path) => {
            write_report(&report, path).context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None if !args.print_summary => {
            println!("{}", report_to_string(&report).context("Failed to serialize report")?);
        }
        None => {}
    }

    if args.print_summary {
        println!("{}", generate_text_summary(&report));
    }

    info!("Stats completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate stats arguments
///
/// **Public** - can be called before execute_stats for early validation
pub fn validate_args(args: &StatsArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Blog file path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Blog file not found: {}", args.input.display());
    }

    if let Some(output) = &args.output_json {
        validate_path(output).context("Invalid report output path")?;

        if resolve_path(output) == resolve_path(&args.input) {
            anyhow::bail!("Report output would overwrite the blog file");
        }
    }

    Ok(())
}

/// Canonical form of `path`; for a file that does not exist yet, the
/// canonical parent joined with the file name
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
