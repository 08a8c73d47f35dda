//! Runtime options for the report listener.

use std::env;
use std::path::PathBuf;

/// Browser label used when neither an override nor the environment names one.
pub const DEFAULT_BROWSER: &str = "Chrome 128.0";

/// Platform label used when the host OS cannot be determined.
pub const DEFAULT_PLATFORM: &str = "Windows 11";

/// Listener configuration.
///
/// Lookups resolve in order: explicit override, environment, literal fallback.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Browser label for the report header; `QA_REPORTER_BROWSER` otherwise.
    pub browser: Option<String>,

    /// Platform label; `QA_REPORTER_OS_NAME`, then the host OS otherwise.
    pub platform: Option<String>,

    /// Working directory: holds `project.properties` and receives
    /// `Test_Reports/` and `payload.json`.
    pub base_dir: PathBuf,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            browser: None,
            platform: None,
            base_dir: PathBuf::from("."),
        }
    }
}

impl ReporterConfig {
    pub fn browser(&self) -> String {
        self.browser
            .clone()
            .or_else(|| env::var("QA_REPORTER_BROWSER").ok())
            .unwrap_or_else(|| DEFAULT_BROWSER.to_string())
    }

    pub fn platform(&self) -> String {
        self.platform
            .clone()
            .or_else(|| env::var("QA_REPORTER_OS_NAME").ok())
            .or_else(host_os_name)
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string())
    }
}

/// Human-readable name of the host OS.
fn host_os_name() -> Option<String> {
    match env::consts::OS {
        "linux" => Some("Linux".to_string()),
        "macos" => Some("macOS".to_string()),
        "windows" => Some("Windows".to_string()),
        "" => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_overrides_win() {
        let config = ReporterConfig {
            browser: Some("Firefox 130".to_string()),
            platform: Some("Ubuntu 24.04".to_string()),
            ..ReporterConfig::default()
        };
        assert_eq!(config.browser(), "Firefox 130");
        assert_eq!(config.platform(), "Ubuntu 24.04");
    }

    #[test]
    fn test_browser_env_then_default() {
        // Only this test touches QA_REPORTER_BROWSER.
        env::set_var("QA_REPORTER_BROWSER", "Edge 129");
        let config = ReporterConfig::default();
        assert_eq!(config.browser(), "Edge 129");

        env::remove_var("QA_REPORTER_BROWSER");
        assert_eq!(config.browser(), DEFAULT_BROWSER);
    }

    #[test]
    fn test_platform_env_beats_host_os() {
        // Only this test touches QA_REPORTER_OS_NAME.
        env::set_var("QA_REPORTER_OS_NAME", "Windows 11");
        let config = ReporterConfig::default();
        assert_eq!(config.platform(), "Windows 11");

        env::remove_var("QA_REPORTER_OS_NAME");
        // Without an override the host OS name fills in.
        assert!(!config.platform().is_empty());
    }

    #[test]
    fn test_default_base_dir_is_working_directory() {
        assert_eq!(ReporterConfig::default().base_dir, PathBuf::from("."));
    }
}
