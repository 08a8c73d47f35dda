//! Report-file sink: one timestamped directory per suite run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Report;

/// Directory that collects one sub-folder per suite run.
pub const REPORT_DIR: &str = "Test_Reports";

/// Report file name inside the run folder.
pub const REPORT_FILE: &str = "test-results.json";

/// Write the pretty-printed report under `Test_Reports/<folder_timestamp>/`.
///
/// Returns the run directory actually used. The folder name has second
/// resolution, so when it already holds a report a numeric suffix is
/// appended instead of overwriting the earlier run.
pub fn write_report(report: &Report, base_dir: &Path, folder_timestamp: &str) -> Result<PathBuf> {
    let folder = resolve_run_dir(base_dir, folder_timestamp);
    fs::create_dir_all(&folder)
        .with_context(|| format!("Failed to create report directory: {}", folder.display()))?;

    let path = folder.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    println!(
        "{} JSON report saved to: {}",
        "📄".blue(),
        path.display().to_string().cyan()
    );

    Ok(folder)
}

fn resolve_run_dir(base_dir: &Path, folder_timestamp: &str) -> PathBuf {
    let reports = base_dir.join(REPORT_DIR);
    let first = reports.join(folder_timestamp);
    if !first.join(REPORT_FILE).exists() {
        return first;
    }

    let mut suffix = 2;
    loop {
        let candidate = reports.join(format!("{}_{}", folder_timestamp, suffix));
        if !candidate.join(REPORT_FILE).exists() {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::ReporterConfig;

    fn sample_report() -> Report {
        let config = ReporterConfig {
            browser: Some("Chrome 128.0".to_string()),
            platform: Some("Windows 11".to_string()),
            ..ReporterConfig::default()
        };
        Report::assemble(Vec::new(), 42, &config)
    }

    #[test]
    fn test_write_report_creates_timestamped_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let folder = write_report(&report, dir.path(), "2025-01-04_17-30-05").unwrap();
        assert_eq!(
            folder,
            dir.path().join(REPORT_DIR).join("2025-01-04_17-30-05")
        );

        let written = std::fs::read_to_string(folder.join(REPORT_FILE)).unwrap();
        let parsed: Report = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.summary.total_execution_time_ms, 42);

        // Pretty form: indented keys on their own lines.
        assert!(written.contains("\n  \"tests\""));
    }

    #[test]
    fn test_same_second_runs_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let first = write_report(&report, dir.path(), "2025-01-04_17-30-05").unwrap();
        let second = write_report(&report, dir.path(), "2025-01-04_17-30-05").unwrap();
        let third = write_report(&report, dir.path(), "2025-01-04_17-30-05").unwrap();

        assert_ne!(first, second);
        assert_eq!(
            second.file_name().unwrap().to_str().unwrap(),
            "2025-01-04_17-30-05_2"
        );
        assert_eq!(
            third.file_name().unwrap().to_str().unwrap(),
            "2025-01-04_17-30-05_3"
        );
        assert!(first.join(REPORT_FILE).exists());
        assert!(second.join(REPORT_FILE).exists());
        assert!(third.join(REPORT_FILE).exists());
    }

    #[test]
    fn test_pre_existing_empty_dir_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join(REPORT_DIR).join("2025-01-04_17-30-05");
        std::fs::create_dir_all(&folder).unwrap();

        let used = write_report(&sample_report(), dir.path(), "2025-01-04_17-30-05").unwrap();
        assert_eq!(used, folder);
    }
}
