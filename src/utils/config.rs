//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Environment variable consulted when `--file` is not given
pub const BLOG_FILE_ENV: &str = "BLOGLIST_FILE";

// Object-shaped exports wrap the blog array under one of these keys
pub const BLOG_COLLECTION_KEYS: &[&str] = &["blogs", "data", "items"];

/// Titles longer than this are truncated in the text summary
pub const MAX_SUMMARY_TITLE_WIDTH: usize = 40;
