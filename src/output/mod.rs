//! Output writers for statistics reports.
//!
//! This module handles writing data in various formats:
//! - JSON reports (file or string)
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use text::generate_text_summary;
