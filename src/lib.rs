//! Suite-level JSON reporting for host-driven test runs.
//!
//! The crate hangs off a host test runner's per-test callbacks: each finished
//! test is normalized into a [`TestRecord`] together with the ambient log
//! buffer, and at suite end two artifacts are produced: a pretty-printed
//! `Test_Reports/<timestamp>/test-results.json` and a compact database
//! upload envelope at `payload.json`.
//!
//! # Example
//!
//! ```rust,no_run
//! use qa_reporter::{logs, ReportListener, TestOutcome};
//!
//! let mut listener = ReportListener::new();
//! listener.on_suite_start();
//!
//! logs::append("opened browser");
//! let mut result = TestOutcome::new("login");
//! result.start_millis = 1000;
//! result.end_millis = 1500;
//! listener.on_test_success(&result);
//!
//! listener.on_suite_finish();
//! ```

pub mod listener;
pub mod logs;
pub mod report;
pub mod utils;

// Re-export common items
pub use listener::outcome::{FailureInfo, TestOutcome, TestStatus};
pub use listener::ReportListener;
pub use report::types::{ErrorData, Report, ReportSummary, TestRecord, UploadPayload};
pub use utils::config::ReporterConfig;
pub use utils::properties::ProjectProperties;
