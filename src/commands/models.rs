use clap::ValueEnum;
use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Blog export to aggregate
    pub input: PathBuf,

    /// Output path for JSON report (None = print to stdout)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("blogs.json"),
            output_json: None,
            print_summary: false,
        }
    }
}

/// A single aggregate selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Aggregate {
    /// Sum of likes over all blogs
    TotalLikes,
    /// The most liked blog
    FavoriteBlog,
    /// The author with the most blogs
    MostBlogs,
    /// The author with the most likes in total
    MostLikes,
}
