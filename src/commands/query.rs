//! Query command: compute a single aggregate.

use super::models::Aggregate;
use crate::aggregator::{favorite_blog, most_blogs, most_likes, total_likes};
use crate::parser::{load_blogs, BlogRecord};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Load `input` and print one aggregate as pretty JSON
///
/// **Public** - called from main.rs
pub fn execute_query(input: &Path, aggregate: Aggregate) -> Result<serde_json::Value> {
    let blogs = load_blogs(input)
        .with_context(|| format!("Failed to load blogs from {}", input.display()))?;

    info!("Computing {:?} over {} blogs", aggregate, blogs.len());

    let value = aggregate_value(&blogs, aggregate)?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(value)
}

/// Compute one aggregate as JSON; absent results become `null`
///
/// **Public** - shared with tests
pub fn aggregate_value(blogs: &[BlogRecord], aggregate: Aggregate) -> Result<serde_json::Value> {
    let value = match aggregate {
        Aggregate::TotalLikes => serde_json::to_value(total_likes(blogs)),
        Aggregate::FavoriteBlog => serde_json::to_value(favorite_blog(blogs)),
        Aggregate::MostBlogs => serde_json::to_value(most_blogs(blogs)),
        Aggregate::MostLikes => serde_json::to_value(most_likes(blogs)),
    };

    value.context("Failed to serialize aggregate")
}
