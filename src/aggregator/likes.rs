//! Like-based statistics over individual posts.

use crate::parser::schema::{BlogRecord, FavoriteSummary};
use log::debug;

/// Sum of likes across all blogs
///
/// **Public** - returns 0 for an empty collection; saturates at `u64::MAX`
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |total, blog| total.saturating_add(blog.likes))
}

/// Find the most liked blog
///
/// **Public** - main entry point for favorite lookup
///
/// # Arguments
/// * `blogs` - Blog collection, in the caller's order
///
/// # Returns
/// The blog with the strictly greatest like count, projected to
/// title/author/likes, or `None` for an empty collection.
/// Among equal like counts the earliest blog wins.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<FavoriteSummary> {
    let favorite = blogs.iter().fold(None::<&BlogRecord>, |current, blog| match current {
        Some(best) if blog.likes <= best.likes => current,
        _ => Some(blog),
    })?;

    debug!("Favorite blog: '{}' ({} likes)", favorite.title, favorite.likes);

    Some(FavoriteSummary {
        title: favorite.title.clone(),
        author: favorite.author.clone(),
        likes: favorite.likes,
    })
}
