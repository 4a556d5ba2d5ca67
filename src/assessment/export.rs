//! Export snapshots of a scored assessment.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::types::{OverallScoreResult, Recommendation};
use crate::models::Responses;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Downloadable record of scores, answers and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub timestamp: DateTime<Utc>,
    pub scores: OverallScoreResult,
    pub responses: Responses,
    pub recommendations: Vec<Recommendation>,
}

impl ExportSnapshot {
    pub fn new(
        scores: OverallScoreResult,
        responses: Responses,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            scores,
            responses,
            recommendations,
        }
    }
}

/// `cloud-audit-YYYY-MM-DD.json` for the given day.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("cloud-audit-{}.json", date.format("%Y-%m-%d"))
}

/// Save an export snapshot to disk.
///
/// If `path` is None, saves to the current directory under the default
/// filename for the snapshot's day.
pub fn save_export(snapshot: &ExportSnapshot, path: Option<&Path>) -> Result<PathBuf, ExportError> {
    let save_path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_export_filename(snapshot.timestamp.date_naive())),
    };

    if let Some(parent) = save_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&save_path, json)?;
    Ok(save_path)
}

/// Load a saved export snapshot.
pub fn load_export(path: &Path) -> Result<ExportSnapshot, ExportError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
