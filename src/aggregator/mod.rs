//! Aggregation of blog collections into summary statistics.
//!
//! Every function here is pure: it borrows the collection, never mutates
//! it, and returns owned summaries. Empty input yields `0` or `None`.
//! - Total likes and favorite blog (per post)
//! - Most prolific and most liked author (per author)

pub mod authors;
pub mod likes;

// Re-export main functions
pub use authors::{most_blogs, most_likes};
pub use likes::{favorite_blog, total_likes};

use crate::parser::schema::{AuthorLikeTotal, AuthorPostCount, BlogRecord, FavoriteSummary};
use log::debug;

/// All aggregates for one collection
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub blog_count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteSummary>,
    pub most_blogs: Option<AuthorPostCount>,
    pub most_likes: Option<AuthorLikeTotal>,
}

/// Compute every aggregate over `blogs`
///
/// **Public** - each field matches the corresponding single-aggregate call
pub fn summarize(blogs: &[BlogRecord]) -> BlogStats {
    debug!("Summarizing {} blogs", blogs.len());

    BlogStats {
        blog_count: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&[]);

        assert_eq!(stats.blog_count, 0);
        assert_eq!(stats.total_likes, 0);
        assert!(stats.favorite_blog.is_none());
        assert!(stats.most_blogs.is_none());
        assert!(stats.most_likes.is_none());
    }
}
