//! JSON export of a conversion run

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use super::RunSummary;
use crate::convert::{ConvertError, Invocation, Mode};

/// Metadata about the run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    pub chartconv_version: String,
    pub mode: Mode,
    pub root_dir: String,
    pub output_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_name: Option<String>,
    pub simplify: bool,
}

/// Counts for the run
#[derive(Serialize)]
pub struct RunCounts {
    pub matched: usize,
    pub converted: usize,
    pub failed: usize,
    pub skipped: usize,
    pub elapsed_seconds: f64,
}

#[derive(Serialize)]
pub struct FailureEntry {
    pub input: String,
    pub command: Invocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub output: String,
}

/// Complete run report
#[derive(Serialize)]
pub struct RunReport {
    pub metadata: RunMetadata,
    pub counts: RunCounts,
    pub converted: Vec<String>,
    pub failures: Vec<FailureEntry>,
}

impl RunReport {
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            metadata: RunMetadata {
                timestamp: Utc::now().to_rfc3339(),
                chartconv_version: env!("CARGO_PKG_VERSION").to_string(),
                mode: summary.mode,
                root_dir: summary.root_dir.display().to_string(),
                output_dir: summary.output_dir.display().to_string(),
                layer_name: summary.layer_name.clone(),
                simplify: summary.simplify,
            },
            counts: RunCounts {
                matched: summary.matched,
                converted: summary.converted.len(),
                failed: summary.failures.len(),
                skipped: summary.skipped,
                elapsed_seconds: summary.elapsed.as_secs_f64(),
            },
            converted: summary
                .converted
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            failures: summary
                .failures
                .iter()
                .map(|f| FailureEntry {
                    input: f.input.display().to_string(),
                    command: f.invocation.clone(),
                    exit_code: f.status,
                    output: f.output.clone(),
                })
                .collect(),
        }
    }
}

/// Write the run report as pretty-printed JSON.
pub fn export_run_report(summary: &RunSummary, output_path: &Path) -> Result<(), ConvertError> {
    let report = RunReport::from_summary(summary);
    let json = serde_json::to_string_pretty(&report).map_err(|e| ConvertError::Report {
        path: output_path.to_path_buf(),
        source: e.into(),
    })?;

    std::fs::write(output_path, json).map_err(|source| ConvertError::Report {
        path: output_path.to_path_buf(),
        source,
    })
}
