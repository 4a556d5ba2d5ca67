//! Runtime configuration resolved from the environment and CLI flags.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::assessment::DEFAULT_TOP_RISKS;
use crate::models::{Framework, FrameworkError};
use crate::store::DEFAULT_DATA_DIR;

pub const FRAMEWORK_ENV: &str = "CLOUD_AUDIT_FRAMEWORK";
pub const DATA_DIR_ENV: &str = "CLOUD_AUDIT_DATA_DIR";
pub const TOP_RISKS_ENV: &str = "CLOUD_AUDIT_TOP_RISKS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Framework document to load; the bundled one when unset.
    pub framework_path: Option<PathBuf>,
    /// Directory holding the response snapshot.
    pub data_dir: PathBuf,
    /// Default length of the top-risks list.
    pub top_risks: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            framework_path: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            top_risks: DEFAULT_TOP_RISKS,
        }
    }
}

impl AuditConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let framework_path = lookup(FRAMEWORK_ENV)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let top_risks = lookup(TOP_RISKS_ENV)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.top_risks);

        Self {
            framework_path,
            data_dir,
            top_risks,
        }
    }

    /// Apply CLI overrides to this config.
    pub fn with_overrides(
        mut self,
        framework_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        top_risks: Option<usize>,
    ) -> Self {
        if let Some(p) = framework_path {
            self.framework_path = Some(p);
        }
        if let Some(d) = data_dir {
            self.data_dir = d;
        }
        if let Some(n) = top_risks {
            self.top_risks = n;
        }
        self
    }

    pub fn load_framework(&self) -> Result<Framework, FrameworkError> {
        match &self.framework_path {
            Some(path) => Framework::load(path),
            None => {
                debug!("Using bundled framework");
                Framework::bundled()
            }
        }
    }
}
