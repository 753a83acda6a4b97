//! Project Store Port - the record store collaborator's fetch contract.
//!
//! The store returns raw records so that validation stays in the domain:
//! one bad record is rejected individually instead of failing the fetch.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::dashboard::LoadFailure;
use crate::domain::foundation::{Role, UserId};

/// Errors that can occur while fetching projects
#[derive(Debug, thiserror::Error)]
pub enum ProjectStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("User is not authorized for this dashboard")]
    Unauthorized,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to decode stored projects: {0}")]
    Decode(String),
}

/// Read-only port supplying a user's projects for one role.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetches every project for `user_id` seen from `role`, in display order.
    ///
    /// A user with no projects gets `Ok(vec![])`, never an error.
    ///
    /// # Errors
    /// Returns `ProjectStoreError` when the store cannot supply the set at all.
    async fn fetch_projects(
        &self,
        user_id: &UserId,
        role: Role,
    ) -> Result<Vec<Value>, ProjectStoreError>;
}

impl From<ProjectStoreError> for LoadFailure {
    fn from(err: ProjectStoreError) -> Self {
        match err {
            ProjectStoreError::Unavailable(msg) | ProjectStoreError::Io(msg) => {
                LoadFailure::Unavailable(msg)
            }
            ProjectStoreError::Unauthorized => LoadFailure::Unauthorized,
            ProjectStoreError::Decode(msg) => LoadFailure::Store(msg),
        }
    }
}
