//! Runner-facing input types.
//!
//! A host runner adapter fills a [`TestOutcome`] from whatever its native
//! result object exposes and hands it to the listener callbacks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Final status of a finished test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Cause reported by the runner for a failed test.
#[derive(Debug, Clone)]
pub struct FailureInfo {
    /// Short name of the error category, e.g. "AssertionError".
    pub kind: String,
    pub message: Option<String>,
    /// Stack frames, outermost first, one entry per frame.
    pub frames: Vec<String>,
}

/// A finished test as handed over by the host runner.
#[derive(Debug, Clone, Default)]
pub struct TestOutcome {
    /// Method-level identifier of the test.
    pub method_name: String,
    pub description: Option<String>,
    /// Start wall clock in epoch milliseconds, as supplied by the runner.
    pub start_millis: i64,
    /// End wall clock in epoch milliseconds, as supplied by the runner.
    pub end_millis: i64,
    /// Present when the runner reported a cause for a failure.
    pub failure: Option<FailureInfo>,
    attributes: HashMap<String, Value>,
}

impl TestOutcome {
    pub fn new(method_name: &str) -> Self {
        Self {
            method_name: method_name.to_string(),
            ..Self::default()
        }
    }

    /// Attach a custom attribute, e.g. a screenshot path set by test code.
    pub fn set_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_value(TestStatus::Passed).unwrap(), json!("PASSED"));
        assert_eq!(serde_json::to_value(TestStatus::Failed).unwrap(), json!("FAILED"));
        assert_eq!(serde_json::to_value(TestStatus::Skipped).unwrap(), json!("SKIPPED"));
    }

    #[test]
    fn test_attributes_roundtrip() {
        let mut outcome = TestOutcome::new("login");
        assert!(outcome.attribute("screenshot").is_none());

        outcome.set_attribute("screenshot", json!("shots/s1.png"));
        assert_eq!(outcome.attribute("screenshot"), Some(&json!("shots/s1.png")));
    }
}
