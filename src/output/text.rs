//! Human-readable text summary of a report.

use crate::parser::schema::StatsReport;
use crate::utils::config::MAX_SUMMARY_TITLE_WIDTH;

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 64;
const RULE_WIDTH: usize = LABEL_WIDTH + VALUE_WIDTH + 3;

/// Render a boxed table of all aggregates
///
/// **Public** - printed by `stats --summary`
pub fn generate_text_summary(report: &StatsReport) -> String {
    let mut lines = Vec::new();

    let favorite = report
        .favorite_blog
        .as_ref()
        .map(|f| {
            format!(
                "{} by {} ({} likes)",
                truncate(&f.title, MAX_SUMMARY_TITLE_WIDTH),
                f.author,
                f.likes
            )
        });
    let most_blogs = report
        .most_blogs
        .as_ref()
        .map(|m| format!("{} ({} blogs)", m.author, m.blogs));
    let most_likes = report
        .most_likes
        .as_ref()
        .map(|m| format!("{} ({} likes)", m.author, m.likes));

    lines.push("  BLOG STATISTICS".to_string());
    lines.push(format!("  ┏{}┓", "━".repeat(RULE_WIDTH)));

    let rows = [
        ("Source", Some(report.source.clone())),
        ("Blogs", Some(report.blog_count.to_string())),
        ("Total likes", Some(report.total_likes.to_string())),
        ("Favorite blog", favorite),
        ("Most blogs", most_blogs),
        ("Most likes", most_likes),
    ];

    for (label, value) in rows {
        let value = value.unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "  ┃ {:<label_w$} {:<value_w$} ┃",
            label,
            truncate(&value, VALUE_WIDTH),
            label_w = LABEL_WIDTH,
            value_w = VALUE_WIDTH
        ));
    }

    lines.push(format!("  ┗{}┛", "━".repeat(RULE_WIDTH)));

    lines.join("\n")
}

/// Keep the tail of text longer than `width` chars, prefixed with "..."
fn truncate(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > width {
        let tail: String = chars[chars.len() - (width - 3)..].iter().collect();
        format!("...{}", tail)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_title() {
        let long = "x".repeat(60);
        let short = truncate(&long, MAX_SUMMARY_TITLE_WIDTH);
        assert!(short.starts_with("..."));
        assert_eq!(short.chars().count(), MAX_SUMMARY_TITLE_WIDTH);
    }

    #[test]
    fn test_truncate_short_title() {
        assert_eq!(truncate("Type wars", MAX_SUMMARY_TITLE_WIDTH), "Type wars");
    }
}
