//! Versioned JSON statistics reports on disk.

use crate::parser::schema::StatsReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Write `report` as pretty JSON, creating missing parent directories
///
/// **Public** - used by `stats --output`
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_path(output_path)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;

    info!(
        "Report for {} blogs written to {}",
        report.blog_count,
        output_path.display()
    );

    Ok(())
}

/// Pretty JSON for stdout
pub fn report_to_string(report: &StatsReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Reject empty paths and existing directories
///
/// **Public** - shared by commands for early argument checks
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Load a report previously written by `write_report`
///
/// # Errors
/// * `OutputError::ReadFailed` - file cannot be opened
/// * `OutputError::SerializationFailed` - not a report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<StatsReport, OutputError> {
    let input_path = input_path.as_ref();

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: StatsReport = serde_json::from_reader(file)?;

    debug!(
        "Loaded report v{} from {} ({} blogs)",
        report.version,
        input_path.display(),
        report.blog_count
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::FavoriteSummary;
    use tempfile::NamedTempFile;

    fn create_test_report() -> StatsReport {
        StatsReport {
            version: "1.0.0".to_string(),
            source: "blogs.json".to_string(),
            blog_count: 1,
            total_likes: 7,
            favorite_blog: Some(FavoriteSummary {
                title: "React patterns".to_string(),
                author: "Michael Chan".to_string(),
                likes: 7,
            }),
            most_blogs: None,
            most_likes: None,
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded, report);
    }

    #[test]
    fn test_absent_aggregates_serialize_as_null() {
        let json = report_to_string(&create_test_report()).unwrap();
        assert!(json.contains("\"most_blogs\": null"));
    }

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_read_report_missing_file() {
        let result = read_report("/nonexistent/report.json");
        assert!(matches!(result, Err(OutputError::ReadFailed(_))));
    }
}
