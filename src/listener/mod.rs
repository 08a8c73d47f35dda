//! Suite listener driven by the host test runner's callbacks.

pub mod outcome;
pub mod state;

use chrono::Local;
use colored::Colorize;
use log::error;

use crate::logs;
use crate::report::json::write_report;
use crate::report::payload::{build_payload, write_payload};
use crate::report::types::{Report, TestRecord};
use crate::report::FOLDER_TIMESTAMP_FORMAT;
use crate::utils::config::ReporterConfig;
use crate::utils::properties::ProjectProperties;

use outcome::{TestOutcome, TestStatus};
use state::SuiteState;

/// Collects per-test results and emits the suite artifacts at the end.
///
/// The host runner invokes the callbacks sequentially; both artifact sinks
/// are best-effort, so a reporting fault never escapes into the runner.
pub struct ReportListener {
    config: ReporterConfig,
    state: SuiteState,
}

impl ReportListener {
    /// Listener rooted in the working directory.
    pub fn new() -> Self {
        Self::with_config(ReporterConfig::default())
    }

    pub fn with_config(config: ReporterConfig) -> Self {
        Self {
            config,
            state: SuiteState::default(),
        }
    }

    /// Suite started: begin a fresh aggregation window.
    pub fn on_suite_start(&mut self) {
        // The host runner may not install a logger; diagnostics must still
        // reach stderr.
        let _ = env_logger::try_init();
        self.state = SuiteState::started();
    }

    pub fn on_test_success(&mut self, result: &TestOutcome) {
        self.record(result, TestStatus::Passed);
    }

    pub fn on_test_failure(&mut self, result: &TestOutcome) {
        self.record(result, TestStatus::Failed);
    }

    pub fn on_test_skipped(&mut self, result: &TestOutcome) {
        self.record(result, TestStatus::Skipped);
    }

    /// Suite finished: assemble the report and emit both artifacts.
    pub fn on_suite_finish(&mut self) {
        self.state.finish();
        let tests = self.state.take_tests();
        let total_ms = self.state.total_execution_time_ms();
        let report = Report::assemble(tests, total_ms, &self.config);

        println!(
            "\n{} Suite finished: {} passed, {} failed, {} skipped ({}ms)",
            "■".blue().bold(),
            report.summary.passed.to_string().green(),
            report.summary.failed.to_string().red(),
            report.summary.skipped.to_string().yellow(),
            report.summary.total_execution_time_ms
        );

        let folder_timestamp = Local::now().format(FOLDER_TIMESTAMP_FORMAT).to_string();

        // Each sink is independent: a report-file failure must not stop the
        // payload, and neither failure may propagate to the host runner.
        let run_folder = match write_report(&report, &self.config.base_dir, &folder_timestamp) {
            Ok(folder) => folder
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(folder_timestamp),
            Err(err) => {
                error!("Failed to write test report: {:#}", err);
                folder_timestamp
            }
        };

        if let Err(err) = self.emit_payload(report, &run_folder) {
            error!("Failed to write upload payload: {:#}", err);
        }
    }

    fn record(&mut self, result: &TestOutcome, status: TestStatus) {
        self.state.record(TestRecord::from_outcome(result, status));
        logs::clear();
    }

    fn emit_payload(&self, report: Report, run_folder: &str) -> anyhow::Result<()> {
        let properties = ProjectProperties::load_from_dir(&self.config.base_dir)?;
        let payload = build_payload(report, run_folder, &properties)?;
        write_payload(&payload, &self.config.base_dir)?;
        Ok(())
    }

    // Remaining runner hooks the reporter deliberately ignores.

    pub fn on_test_start(&mut self, _result: &TestOutcome) {}

    pub fn on_test_failed_within_success_percentage(&mut self, _result: &TestOutcome) {}

    pub fn on_test_failed_with_timeout(&mut self, _result: &TestOutcome) {}
}

impl Default for ReportListener {
    fn default() -> Self {
        Self::new()
    }
}
