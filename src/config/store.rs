//! Project store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Project store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Which adapter supplies project records
    #[serde(default)]
    pub backend: StoreBackend,

    /// Root directory for the file backend
    pub data_dir: Option<PathBuf>,

    /// Seed the in-memory backend with the sample data set
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

/// Project store backend
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StoreBackend::File && self.data_dir.is_none() {
            return Err(ValidationError::MissingRequired("store.data_dir"));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: None,
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

fn default_seed_sample_data() -> bool {
    true
}
