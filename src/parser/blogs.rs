//! Loader for blog exports.
//!
//! Turns raw JSON (the `GET /api/blogs` response, or an object wrapping it)
//! into validated `BlogRecord`s. Field presence is checked here so the
//! aggregator can assume well-formed records.

use super::schema::{BlogRecord, StatsReport};
use crate::aggregator::BlogStats;
use crate::utils::config::{BLOG_COLLECTION_KEYS, SCHEMA_VERSION};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and validate blogs from a JSON file
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened
/// * `ParseError::JsonError` - file is not valid JSON
/// * `ParseError::InvalidFormat` / `ParseError::InvalidRecord` - see `parse_blogs`
pub fn load_blogs(input_path: impl AsRef<Path>) -> Result<Vec<BlogRecord>, ParseError> {
    let input_path = input_path.as_ref();

    info!("Loading blogs from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_blogs(&raw)
}

/// Parse raw export JSON into blog records
///
/// **Public** - used when the JSON is already in memory
///
/// # Arguments
/// * `raw` - either an array of blog objects or an object holding one
///   under a key from `BLOG_COLLECTION_KEYS`
///
/// # Errors
/// * `ParseError::InvalidFormat` - top level is neither shape
/// * `ParseError::InvalidRecord` - a record is missing a field, has a
///   negative or non-integer `likes`, an empty title, or pushes the
///   collection's like total past `u64::MAX`
pub fn parse_blogs(raw: &serde_json::Value) -> Result<Vec<BlogRecord>, ParseError> {
    let items = extract_blog_array(raw)?;

    debug!("Parsing {} blog records", items.len());

    let blogs = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    check_like_total(&blogs)?;

    debug!("Parsed {} blog records", blogs.len());

    Ok(blogs)
}

/// Locate the blog array inside the export
///
/// **Private** - internal helper for parse_blogs
fn extract_blog_array(raw: &serde_json::Value) -> Result<&Vec<serde_json::Value>, ParseError> {
    match raw {
        serde_json::Value::Array(items) => Ok(items),

        serde_json::Value::Object(obj) => {
            for key in BLOG_COLLECTION_KEYS {
                if let Some(serde_json::Value::Array(items)) = obj.get(*key) {
                    debug!("Found blog array under '{}'", key);
                    return Ok(items);
                }
            }

            Err(ParseError::InvalidFormat(format!(
                "object has no blog array under any of {:?}",
                BLOG_COLLECTION_KEYS
            )))
        }

        other => Err(ParseError::InvalidFormat(format!(
            "expected array or object, got {}",
            json_kind(other)
        ))),
    }
}

/// Deserialize and check a single record
///
/// **Private** - internal helper for parse_blogs
fn parse_record(index: usize, item: &serde_json::Value) -> Result<BlogRecord, ParseError> {
    let record = BlogRecord::deserialize(item).map_err(|e| ParseError::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;

    if record.title.trim().is_empty() {
        return Err(ParseError::InvalidRecord {
            index,
            reason: "title is empty".to_string(),
        });
    }

    if record.author.is_empty() {
        warn!("Blog '{}' (index {}) has an empty author", record.title, index);
    }

    Ok(record)
}

/// Every like sum the aggregator computes is bounded by the collection
/// total, so the total must fit in `u64`
///
/// **Private** - internal helper for parse_blogs
fn check_like_total(blogs: &[BlogRecord]) -> Result<(), ParseError> {
    blogs.iter().enumerate().try_fold(0u64, |total, (index, blog)| {
        total
            .checked_add(blog.likes)
            .ok_or_else(|| ParseError::InvalidRecord {
                index,
                reason: format!("likes {} overflow the collection total", blog.likes),
            })
    })?;

    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Build a versioned report from computed statistics
///
/// **Public** - bridges aggregator output to the on-disk schema
pub fn to_report(source: &str, stats: BlogStats) -> StatsReport {
    StatsReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        blog_count: stats.blog_count,
        total_likes: stats.total_likes,
        favorite_blog: stats.favorite_blog,
        most_blogs: stats.most_blogs,
        most_likes: stats.most_likes,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_array_export() {
        let raw = json!([
            {
                "id": "5a422a851b54a676234d17f7",
                "title": "React patterns",
                "author": "Michael Chan",
                "url": "https://reactpatterns.com/",
                "likes": 7,
                "comments": ["very useful", "i like"]
            }
        ]);

        let blogs = parse_blogs(&raw).unwrap();

        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].id.as_deref(), Some("5a422a851b54a676234d17f7"));
        assert_eq!(blogs[0].likes, 7);
        assert_eq!(blogs[0].comments.len(), 2);
    }

    #[test]
    fn test_parse_wrapped_export() {
        let raw = json!({
            "blogs": [
                { "title": "Type wars", "author": "Robert C. Martin", "url": "u", "likes": 2 }
            ]
        });

        let blogs = parse_blogs(&raw).unwrap();
        assert_eq!(blogs.len(), 1);
        assert!(blogs[0].comments.is_empty());
    }

    #[test]
    fn test_parse_rejects_scalar() {
        let result = parse_blogs(&json!(42));
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_object_without_blogs() {
        let result = parse_blogs(&json!({ "users": [] }));
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let raw = json!([{ "title": "  ", "author": "a", "url": "u", "likes": 1 }]);
        let result = parse_blogs(&raw);
        assert!(matches!(result, Err(ParseError::InvalidRecord { index: 0, .. })));
    }

    #[test]
    fn test_parse_rejects_like_total_overflow() {
        let raw = json!([
            { "title": "a", "author": "Ann", "url": "u", "likes": 1 },
            { "title": "b", "author": "Ann", "url": "u", "likes": u64::MAX }
        ]);

        let result = parse_blogs(&raw);
        assert!(matches!(result, Err(ParseError::InvalidRecord { index: 1, .. })));
    }

    #[test]
    fn test_parse_accepts_like_total_at_ceiling() {
        let raw = json!([
            { "title": "a", "author": "Ann", "url": "u", "likes": u64::MAX - 1 },
            { "title": "b", "author": "Bob", "url": "u", "likes": 1 }
        ]);

        assert_eq!(parse_blogs(&raw).unwrap().len(), 2);
    }

    #[test]
    fn test_to_report_carries_stats() {
        let stats = BlogStats {
            blog_count: 2,
            total_likes: 9,
            favorite_blog: None,
            most_blogs: None,
            most_likes: None,
        };

        let report = to_report("blogs.json", stats);

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.source, "blogs.json");
        assert_eq!(report.blog_count, 2);
        assert_eq!(report.total_likes, 9);
        assert!(!report.generated_at.is_empty());
    }
}
