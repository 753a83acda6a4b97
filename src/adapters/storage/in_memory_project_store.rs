//! In-Memory Project Store Adapter
//!
//! Holds raw project records in memory, keyed by user and role.
//! Useful for testing, demos and development.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::sample_projects::{sample_client_projects, sample_provider_projects};
use crate::domain::foundation::{Role, UserId};
use crate::ports::{ProjectStore, ProjectStoreError};

/// In-memory storage for project records
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<HashMap<(UserId, Role), Vec<Value>>>>,
}

impl InMemoryProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the sample data set for `user_id` in both roles
    pub async fn with_sample_data(user_id: &UserId) -> Self {
        let store = Self::new();
        store
            .put(user_id.clone(), Role::Provider, sample_provider_projects())
            .await;
        store
            .put(user_id.clone(), Role::Client, sample_client_projects())
            .await;
        store
    }

    /// Replace the raw records for a user and role
    pub async fn put(&self, user_id: UserId, role: Role, records: Vec<Value>) {
        self.projects.write().await.insert((user_id, role), records);
    }

    /// Replace the records for a user and role from typed projects
    pub async fn put_typed<P: Serialize>(
        &self,
        user_id: UserId,
        role: Role,
        projects: &[P],
    ) -> Result<(), ProjectStoreError> {
        let records = projects
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ProjectStoreError::Decode(e.to_string()))?;
        self.put(user_id, role, records).await;
        Ok(())
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.projects.write().await.clear();
    }

    /// Number of (user, role) sets held
    pub async fn set_count(&self) -> usize {
        self.projects.read().await.len()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn fetch_projects(
        &self,
        user_id: &UserId,
        role: Role,
    ) -> Result<Vec<Value>, ProjectStoreError> {
        let projects = self.projects.read().await;
        Ok(projects
            .get(&(user_id.clone(), role))
            .cloned()
            .unwrap_or_default())
    }
}
