//! Blog record and report schema definitions.
//!
//! `BlogRecord` is the input shape shared with the blog API; the summary
//! types and `StatsReport` describe the JSON we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// A single blog post as exported by the blog API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    /// Store identifier (`id` from the API, `_id` from raw dumps)
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    /// Exact-match key for per-author statistics
    pub author: String,

    pub url: String,

    pub likes: u64,

    #[serde(default)]
    pub comments: Vec<String>,
}

impl BlogRecord {
    /// Create a record without id or comments
    ///
    /// **Public** - constructor, mostly used by tests and fixtures
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
            comments: Vec::new(),
        }
    }
}

/// The most liked blog, without url or comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSummary {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// An author together with the number of posts they wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPostCount {
    pub author: String,
    pub blogs: u64,
}

/// An author together with the likes summed over all their posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikeTotal {
    pub author: String,
    pub likes: u64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the blogs were loaded from (usually a file path)
    pub source: String,

    /// Number of blog records aggregated
    pub blog_count: usize,

    pub total_likes: u64,

    /// `null` when the collection is empty
    pub favorite_blog: Option<FavoriteSummary>,

    pub most_blogs: Option<AuthorPostCount>,

    pub most_likes: Option<AuthorLikeTotal>,

    /// Timestamp when report was generated
    pub generated_at: String,
}
