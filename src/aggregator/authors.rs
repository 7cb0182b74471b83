//! Per-author statistics.
//!
//! Authors are grouped by exact string match. Tallies are kept in order of
//! each author's first appearance and scanned once with a strict `>`, so
//! when several authors share the top value the one seen first wins.
//! Per-author sums saturate at `u64::MAX`.

use crate::parser::schema::{AuthorLikeTotal, AuthorPostCount, BlogRecord};
use log::debug;
use std::collections::HashMap;

/// Find the author with the most posts
///
/// **Public** - returns `None` for an empty collection
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorPostCount> {
    let tallies = tally_by_author(blogs, |_| 1);
    let (author, count) = leader(&tallies)?;

    debug!("Most blogs: {} ({} of {} authors)", author, count, tallies.len());

    Some(AuthorPostCount {
        author: author.to_string(),
        blogs: count,
    })
}

/// Find the author whose posts have the most likes in total
///
/// **Public** - returns `None` for an empty collection
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorLikeTotal> {
    let tallies = tally_by_author(blogs, |blog| blog.likes);
    let (author, likes) = leader(&tallies)?;

    debug!("Most likes: {} ({} of {} authors)", author, likes, tallies.len());

    Some(AuthorLikeTotal {
        author: author.to_string(),
        likes,
    })
}

/// Accumulate `weight` per author in first-appearance order
///
/// **Private** - shared by most_blogs and most_likes
fn tally_by_author<'a, F>(blogs: &'a [BlogRecord], weight: F) -> Vec<(&'a str, u64)>
where
    F: Fn(&BlogRecord) -> u64,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, u64)> = Vec::new();

    for blog in blogs {
        let slot = *slots.entry(blog.author.as_str()).or_insert_with(|| {
            tallies.push((blog.author.as_str(), 0));
            tallies.len() - 1
        });
        tallies[slot].1 = tallies[slot].1.saturating_add(weight(blog));
    }

    tallies
}

/// First tally holding the maximum value
fn leader<'a>(tallies: &[(&'a str, u64)]) -> Option<(&'a str, u64)> {
    tallies.iter().fold(None, |current, &(author, total)| match current {
        Some((_, best)) if total <= best => current,
        _ => Some((author, total)),
    })
}
