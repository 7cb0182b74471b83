//! Bloglist Stats
//!
//! Engagement statistics for blog collections: total likes,
//! the favorite blog, and the most prolific and most liked authors.
//!
//! This crate provides the core implementation for the
//! `bloglist` CLI tool. The aggregation functions are pure and can be
//! used directly:
//!
//! ```
//! use bloglist_stats::aggregator::{favorite_blog, total_likes};
//! use bloglist_stats::parser::BlogRecord;
//!
//! let blogs = vec![BlogRecord::new("Type wars", "Robert C. Martin", "https://blog.cleancoder.com", 2)];
//! assert_eq!(total_likes(&blogs), 2);
//! assert_eq!(favorite_blog(&blogs).map(|f| f.likes), Some(2));
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
