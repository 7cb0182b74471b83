use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Blogs: {}", report.blog_count);
    println!("  Total Likes: {}", report.total_likes);
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Bloglist Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Blog export the report was built from");
        println!("  blog_count: number       - Number of blogs aggregated");
        println!("  total_likes: number      - Sum of likes over all blogs");
        println!("  favorite_blog: object?   - Most liked blog (null if no blogs)");
        println!("    title: string");
        println!("    author: string");
        println!("    likes: number");
        println!("  most_blogs: object?      - Author with most blogs");
        println!("    author: string");
        println!("    blogs: number");
        println!("  most_likes: object?      - Author with most likes in total");
        println!("    author: string");
        println!("    likes: number");
        println!("  generated_at: string     - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Bloglist Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Engagement statistics for blog collections.");
}
