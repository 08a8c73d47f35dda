//! Report document types and per-test normalization.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EXECUTION_DATE_FORMAT;
use crate::listener::outcome::{FailureInfo, TestOutcome, TestStatus};
use crate::logs;
use crate::utils::config::ReporterConfig;

/// Fixed project label stamped into every report.
pub const PROJECT_LABEL: &str = "Automation Project";

/// Fixed environment label stamped into every report.
pub const ENVIRONMENT_LABEL: &str = "QA";

/// Normalized outcome of a single finished test.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Log lines collected while the test ran.
    pub logs: Vec<String>,
    pub status: TestStatus,
    pub test_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub execution_time_ms: u64,
    /// Present only on failed tests that carried a cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
}

/// Failure details attached to a FAILED record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Frames separated by `\n`, outer whitespace trimmed.
    pub stack_trace: String,
}

impl TestRecord {
    /// Normalize a finished test, snapshotting the ambient log buffer.
    ///
    /// The snapshot is an independent copy; the caller clears the buffer
    /// afterwards. A cause is only attached when the test actually failed.
    pub fn from_outcome(outcome: &TestOutcome, status: TestStatus) -> Self {
        let error = match (status, &outcome.failure) {
            (TestStatus::Failed, Some(failure)) => Some(ErrorData::from_failure(failure)),
            _ => None,
        };

        Self {
            logs: logs::snapshot(),
            status,
            test_name: outcome.method_name.clone(),
            screenshot: outcome.attribute("screenshot").map(attribute_to_string),
            description: outcome.description.clone(),
            execution_time_ms: (outcome.end_millis - outcome.start_millis).max(0) as u64,
            error,
        }
    }
}

impl ErrorData {
    fn from_failure(failure: &FailureInfo) -> Self {
        Self {
            kind: failure.kind.clone(),
            message: failure.message.clone(),
            stack_trace: failure.frames.join("\n").trim().to_string(),
        }
    }
}

/// String attributes are taken verbatim, anything else via its JSON form.
fn attribute_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Per-status counts plus the suite wall-clock duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub failed: u32,
    pub passed: u32,
    pub skipped: u32,
    pub total_tests: u32,
    pub total_execution_time_ms: u64,
}

impl ReportSummary {
    /// Tally counts in a single pass over the records.
    pub fn tally(tests: &[TestRecord], total_execution_time_ms: u64) -> Self {
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for test in tests {
            match test.status {
                TestStatus::Passed => passed += 1,
                TestStatus::Failed => failed += 1,
                TestStatus::Skipped => skipped += 1,
            }
        }

        Self {
            failed,
            passed,
            skipped,
            total_tests: tests.len() as u32,
            total_execution_time_ms,
        }
    }
}

/// Aggregated suite document written to `test-results.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub tests: Vec<TestRecord>,
    pub browser: String,
    pub project: String,
    pub summary: ReportSummary,
    pub platform: String,
    pub environment: String,
    pub execution_date: String,
}

impl Report {
    /// Compose the final suite document, stamping the execution date now.
    pub fn assemble(
        tests: Vec<TestRecord>,
        total_execution_time_ms: u64,
        config: &ReporterConfig,
    ) -> Self {
        let summary = ReportSummary::tally(&tests, total_execution_time_ms);
        Self {
            tests,
            browser: config.browser(),
            project: PROJECT_LABEL.to_string(),
            summary,
            platform: config.platform(),
            environment: ENVIRONMENT_LABEL.to_string(),
            execution_date: Utc::now().format(EXECUTION_DATE_FORMAT).to_string(),
        }
    }
}

/// Upload envelope written to `payload.json`.
///
/// `json_result` embeds the report as a nested object so the whole envelope
/// serializes in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPayload {
    pub id: String,
    pub run_id: String,
    pub json_result: Report,
    pub timestamp: String,
    pub user_id: String,
    pub project_id: String,
    pub created_at: String,
}
