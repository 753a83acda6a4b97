//! File-based Project Store Adapter
//!
//! Reads raw project records from disk, one file per user and role:
//! `<base>/<user_id>/<role>.json`, falling back to `<role>.yaml`.
//! A missing file means the user has no projects in that role.

use async_trait::async_trait;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::{Role, UserId};
use crate::ports::{ProjectStore, ProjectStoreError};

/// File-backed, read-only project store
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    base_path: PathBuf,
}

enum Format {
    Json,
    Yaml,
}

impl FileProjectStore {
    /// Create a store rooted at `base_path`
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding a user's files
    fn user_dir(&self, user_id: &UserId) -> PathBuf {
        self.base_path.join(user_id.as_str())
    }

    /// Candidate files for a user and role, in lookup order
    fn candidates(&self, user_id: &UserId, role: Role) -> [(PathBuf, Format); 2] {
        let dir = self.user_dir(user_id);
        [
            (dir.join(format!("{}.json", role)), Format::Json),
            (dir.join(format!("{}.yaml", role)), Format::Yaml),
        ]
    }

    fn decode(contents: &str, format: &Format) -> Result<Value, ProjectStoreError> {
        match format {
            Format::Json => serde_json::from_str(contents)
                .map_err(|e| ProjectStoreError::Decode(e.to_string())),
            Format::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| ProjectStoreError::Decode(e.to_string())),
        }
    }
}

#[async_trait]
impl ProjectStore for FileProjectStore {
    async fn fetch_projects(
        &self,
        user_id: &UserId,
        role: Role,
    ) -> Result<Vec<Value>, ProjectStoreError> {
        if user_id.as_str().contains(['/', '\\']) || user_id.as_str().starts_with('.') {
            return Err(ProjectStoreError::Unauthorized);
        }

        for (path, format) in self.candidates(user_id, role) {
            let contents = match fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ProjectStoreError::Io(e.to_string())),
            };
            debug!(path = %path.display(), "read project file");

            return match Self::decode(&contents, &format)? {
                Value::Array(records) => Ok(records),
                Value::Null => Ok(Vec::new()),
                _ => Err(ProjectStoreError::Decode(format!(
                    "{} does not contain a list of projects",
                    path.display()
                ))),
            };
        }

        Ok(Vec::new())
    }
}
