//! Minimal `key=value` properties file loader.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// A required key was absent from the properties file.
#[derive(Debug, Error)]
#[error("required key '{key}' missing from {file}")]
pub struct MissingKey {
    pub key: String,
    pub file: String,
}

/// Key/value pairs loaded from `project.properties`.
#[derive(Debug, Clone, Default)]
pub struct ProjectProperties {
    file: String,
    values: HashMap<String, String>,
}

impl ProjectProperties {
    /// Conventional file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "project.properties";

    /// Load `<dir>/project.properties`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::parse(&content, &path.display().to_string()))
    }

    /// Parse `key=value` lines. `#` and `!` lines are comments; keys and
    /// values are trimmed; a value may itself contain `=`.
    pub fn parse(content: &str, file: &str) -> Self {
        let mut values = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self {
            file: file.to_string(),
            values,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key, failing with an error that names it.
    pub fn require(&self, key: &str) -> Result<&str, MissingKey> {
        self.get(key).ok_or_else(|| MissingKey {
            key: key.to_string(),
            file: self.file.clone(),
        })
    }
}
