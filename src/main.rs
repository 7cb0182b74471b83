//! Bloglist Stats CLI
//!
//! Computes engagement statistics over a JSON blog export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use bloglist_stats::utils::config::BLOG_FILE_ENV;
use bloglist_stats::commands::{
    display_schema, display_version, execute_query, execute_stats, validate_args,
    validate_report_file, Aggregate, StatsArgs,
};

/// Bloglist Stats - engagement statistics for blog collections
#[derive(Parser, Debug)]
#[command(name = "bloglist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute every aggregate over a blog export
    Stats {
        /// Path to blog export JSON
        #[arg(short, long, env = BLOG_FILE_ENV)]
        file: PathBuf,

        /// Output path for JSON report (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Compute a single aggregate and print it as JSON
    Query {
        /// Path to blog export JSON
        #[arg(short, long, env = BLOG_FILE_ENV)]
        file: PathBuf,

        /// Aggregate to compute
        #[arg(value_enum)]
        aggregate: Aggregate,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Stats {
            file,
            output,
            summary,
        } => {
            let args = StatsArgs {
                input: file,
                output_json: output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_stats(&args)?;
        }

        Commands::Query { file, aggregate } => {
            execute_query(&file, aggregate)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
