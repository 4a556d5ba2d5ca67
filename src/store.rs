//! Response snapshot storage between runs.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::models::Responses;

pub const SNAPSHOT_VERSION: &str = "1.0";
pub const DEFAULT_DATA_DIR: &str = ".cloud-audit";
const SNAPSHOT_FILE: &str = "responses.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Versioned envelope around the answer map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSnapshot {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub responses: Responses,
}

impl ResponseSnapshot {
    pub fn new(responses: Responses) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            last_updated: Utc::now(),
            responses,
        }
    }
}

/// Trait abstracting how answers are persisted between runs.
pub trait ResponseStore {
    /// `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<ResponseSnapshot>, StoreError>;
    fn save(&self, responses: &Responses) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
    fn exists(&self) -> bool;
}

/// Filesystem-backed store using `<data_dir>/responses.json`.
pub struct FileResponseStore {
    dir: PathBuf,
}

impl FileResponseStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILE)
    }
}

impl Default for FileResponseStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl ResponseStore for FileResponseStore {
    fn load(&self) -> Result<Option<ResponseSnapshot>, StoreError> {
        let path = self.path();
        if !path.exists() {
            debug!("No saved responses at {}", path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let snapshot: ResponseSnapshot = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Ignoring unreadable saved responses at {}: {}", path.display(), e);
                return Ok(None);
            }
        };
        if snapshot.version != SNAPSHOT_VERSION {
            warn!(
                "Ignoring saved responses with version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            );
            return Ok(None);
        }

        debug!("Loaded responses from {}", path.display());
        Ok(Some(snapshot))
    }

    fn save(&self, responses: &Responses) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(&ResponseSnapshot::new(responses.clone()))?;
        let path = self.path();
        fs::write(&path, json)?;
        debug!("Saved responses to {}", path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path().exists()
    }
}

/// Load just the answer map, empty when nothing usable is stored.
pub fn load_responses<S: ResponseStore + ?Sized>(store: &S) -> Result<Responses, StoreError> {
    Ok(store.load()?.map(|s| s.responses).unwrap_or_default())
}
