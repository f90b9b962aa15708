//! Selection result export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{IterationRecord, SearchOutcome};

/// Metadata about the selection run
#[derive(Serialize)]
pub struct SelectionMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Merit version
    pub merit_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Search direction requested at the CLI
    pub direction: String,
    /// Number of candidate features before the search
    pub candidate_features: usize,
}

/// One search direction's result with its full iteration trail
#[derive(Serialize)]
pub struct RunExport {
    pub direction: String,
    pub selected: Vec<String>,
    pub score: f64,
    pub iterations: usize,
    pub log: Vec<IterationRecord>,
}

impl RunExport {
    pub fn from_outcome(direction: &str, outcome: &SearchOutcome) -> Self {
        Self {
            direction: direction.to_string(),
            selected: outcome.selected.clone(),
            score: outcome.score,
            iterations: outcome.log.len(),
            log: outcome.log.clone(),
        }
    }
}

/// Complete selection export with metadata
#[derive(Serialize)]
pub struct SelectionExport {
    pub metadata: SelectionMetadata,
    pub runs: Vec<RunExport>,
}

/// Parameters describing the run being exported
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub target_column: &'a str,
    pub direction: &'a str,
    pub candidate_features: usize,
}

/// Write the selection results to a JSON file
pub fn export_selection(path: &Path, params: &ExportParams, runs: Vec<RunExport>) -> Result<()> {
    let export = SelectionExport {
        metadata: SelectionMetadata {
            timestamp: Utc::now().to_rfc3339(),
            merit_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.to_string(),
            direction: params.direction.to_string(),
            candidate_features: params.candidate_features,
        },
        runs,
    };

    let json = serde_json::to_string_pretty(&export).context("Failed to serialize results")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    Ok(())
}
