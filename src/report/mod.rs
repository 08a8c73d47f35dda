pub mod json;
pub mod payload;
pub mod types;

pub use types::{ErrorData, Report, ReportSummary, TestRecord, UploadPayload};

/// `executionDate` format inside the report and payload, rendered in UTC.
///
/// The offset renders as `+00:00`, e.g. `2025-01-04 17:30:05+00:00`.
pub const EXECUTION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Run-folder name format under `Test_Reports/`, rendered in local time.
pub const FOLDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
