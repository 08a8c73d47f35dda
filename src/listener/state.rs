//! Per-suite aggregation state.

use chrono::Utc;

use crate::report::types::TestRecord;

/// Accumulated records and timing for one suite run.
///
/// Mutated only from the runner's callback thread; a fresh instance is built
/// at every suite start.
#[derive(Debug, Default)]
pub struct SuiteState {
    tests: Vec<TestRecord>,
    started_at_ms: i64,
    finished_at_ms: i64,
}

impl SuiteState {
    /// New state with the start instant captured now.
    pub fn started() -> Self {
        Self {
            tests: Vec::new(),
            started_at_ms: Utc::now().timestamp_millis(),
            finished_at_ms: 0,
        }
    }

    /// Append a record in callback-arrival order.
    pub fn record(&mut self, record: TestRecord) {
        self.tests.push(record);
    }

    /// Capture the end instant.
    pub fn finish(&mut self) {
        self.finished_at_ms = Utc::now().timestamp_millis();
    }

    /// Suite wall-clock duration, clamped to zero on clock skew.
    pub fn total_execution_time_ms(&self) -> u64 {
        (self.finished_at_ms - self.started_at_ms).max(0) as u64
    }

    pub fn tests(&self) -> &[TestRecord] {
        &self.tests
    }

    /// Move the accumulated records out for report assembly.
    pub fn take_tests(&mut self) -> Vec<TestRecord> {
        std::mem::take(&mut self.tests)
    }
}
