//! Output formatting and persistence for summary records.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::SummaryRecord;
use std::path::Path;

/// Logs a serializable value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Logs a serializable value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes the summary sequence to a CSV file with a header row.
///
/// Summaries supersede each other in full on reload, so the file is
/// rewritten fresh rather than appended to.
pub fn write_summary(path: &str, records: &[SummaryRecord]) -> Result<()> {
    debug!(path, count = records.len(), "Writing summary CSV");

    let mut writer = csv::Writer::from_path(Path::new(path))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_record() -> SummaryRecord {
        SummaryRecord {
            diet_group: "vegan".to_string(),
            gender: "All".to_string(),
            age_group: "All".to_string(),
            ghgs: 2.5,
            land_use: 1.0,
            water_scarcity: 0.5,
            eutrophication: 0.1,
            acidification: 0.2,
            biodiversity: 0.3,
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_record());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_record()).unwrap();
    }

    #[test]
    fn test_write_summary_creates_file_with_header() {
        let path = temp_path("diet_impacts_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_summary(&path, &[sample_record()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("diet_group")).count();
        assert_eq!(header_count, 1);

        let header = content.lines().next().unwrap();
        for indicator in crate::reconcile::Indicator::ALL {
            assert!(header.contains(indicator.name()));
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_summary_one_line_per_record() {
        let path = temp_path("diet_impacts_test_rows.csv");
        let _ = fs::remove_file(&path);

        write_summary(&path, &[sample_record(), sample_record()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // 1 header + 2 data rows
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_summary_overwrites_previous_run() {
        let path = temp_path("diet_impacts_test_overwrite.csv");
        let _ = fs::remove_file(&path);

        write_summary(&path, &[sample_record(), sample_record()]).unwrap();
        write_summary(&path, &[sample_record()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_file(&path).unwrap();
    }
}
