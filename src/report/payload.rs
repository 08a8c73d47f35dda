//! Upload-payload sink: wraps the report in a database envelope.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::types::{Report, UploadPayload};
use crate::utils::properties::ProjectProperties;

/// Payload file name, written into the working directory.
pub const PAYLOAD_FILE: &str = "payload.json";

/// Build the upload envelope for a finished suite.
///
/// `run_folder` is the name of the report directory the suite actually used,
/// so `run_id` stays traceable to the artifacts on disk. Fails when any of
/// the identity keys is missing from `project.properties`.
pub fn build_payload(
    report: Report,
    run_folder: &str,
    properties: &ProjectProperties,
) -> Result<UploadPayload> {
    let project_id = properties.require("project.id")?.to_string();
    let user_id = properties.require("user.id")?.to_string();
    let project_name = properties.require("project.name")?;

    let execution_date = report.execution_date.clone();
    Ok(UploadPayload {
        id: Uuid::new_v4().to_string(),
        run_id: format!("{}_{}", project_name, run_folder),
        json_result: report,
        timestamp: execution_date.clone(),
        user_id,
        project_id,
        created_at: execution_date,
    })
}

/// Write the envelope as compact JSON, overwriting any prior payload.
pub fn write_payload(payload: &UploadPayload, base_dir: &Path) -> Result<PathBuf> {
    let path = base_dir.join(PAYLOAD_FILE);
    let json = serde_json::to_string(payload)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write payload: {}", path.display()))?;

    println!(
        "{} Upload payload saved to: {}",
        "📦".blue(),
        path.display().to_string().cyan()
    );

    Ok(path)
}
