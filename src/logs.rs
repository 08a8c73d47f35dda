//! Process-wide log collection for the currently running test.
//!
//! Test code appends lines while it executes; the listener snapshots the
//! buffer when the test finishes and clears it before the next test runs.
//! The buffer is shared by the whole process, so the host runner must drive
//! tests sequentially; parallel runners need a per-thread buffer instead.

use std::sync::{Mutex, OnceLock};

fn buffer() -> &'static Mutex<Vec<String>> {
    static BUFFER: OnceLock<Mutex<Vec<String>>> = OnceLock::new();
    BUFFER.get_or_init(|| Mutex::new(Vec::new()))
}

/// Append a log line for the currently running test.
pub fn append(line: impl Into<String>) {
    if let Ok(mut lines) = buffer().lock() {
        lines.push(line.into());
    }
}

/// Take an independent copy of the collected lines.
///
/// Later appends or clears do not mutate a snapshot that was already taken.
pub fn snapshot() -> Vec<String> {
    buffer().lock().map(|lines| lines.clone()).unwrap_or_default()
}

/// Drop all collected lines.
pub fn clear() {
    if let Ok(mut lines) = buffer().lock() {
        lines.clear();
    }
}

/// Serializes tests that touch the process-wide buffer.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
