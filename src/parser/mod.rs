//! Blog export parsing and schema definitions.
//!
//! This module handles:
//! - Loading blog exports from JSON files
//! - Validating records at the boundary
//! - Defining the report schema

pub mod blogs;
pub mod schema;

// Re-export main types
pub use blogs::{load_blogs, parse_blogs, to_report};
pub use schema::{AuthorLikeTotal, AuthorPostCount, BlogRecord, FavoriteSummary, StatsReport};
