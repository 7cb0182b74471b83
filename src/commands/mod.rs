//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod query;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use models::{Aggregate, StatsArgs};
pub use query::{aggregate_value, execute_query};
pub use stats::{execute_stats, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
