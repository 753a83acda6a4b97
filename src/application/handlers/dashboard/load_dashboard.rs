//! LoadDashboardHandler - Query handler fetching one role's raw project set.
//!
//! Store errors are mapped onto [`LoadFailure`] here so the dashboard state
//! never sees adapter-specific error types.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::dashboard::LoadFailure;
use crate::domain::foundation::{Role, UserId};
use crate::ports::ProjectStore;

/// Query to load a user's projects for one dashboard role.
#[derive(Debug, Clone)]
pub struct LoadDashboardQuery {
    /// The user whose dashboard is being shown.
    pub user_id: UserId,
    /// Which side of the engagement the user is viewing.
    pub role: Role,
}

/// Raw records handed to the dashboard for ingestion.
pub type LoadDashboardResult = Vec<Value>;

/// Handler for fetching dashboard records from the project store.
pub struct LoadDashboardHandler {
    store: Arc<dyn ProjectStore>,
}

impl LoadDashboardHandler {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: LoadDashboardQuery) -> Result<LoadDashboardResult, LoadFailure> {
        debug!(user = %query.user_id, role = %query.role, "fetching dashboard projects");

        match self.store.fetch_projects(&query.user_id, query.role).await {
            Ok(records) => {
                debug!(records = records.len(), "project store returned records");
                Ok(records)
            }
            Err(err) => {
                warn!(user = %query.user_id, role = %query.role, error = %err, "project store fetch failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ProjectStoreError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockProjectStore {
        records: Vec<Value>,
        failure: Option<fn() -> ProjectStoreError>,
        seen: Mutex<Vec<(UserId, Role)>>,
    }

    impl MockProjectStore {
        fn with_records(records: Vec<Value>) -> Self {
            Self {
                records,
                failure: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(failure: fn() -> ProjectStoreError) -> Self {
            Self {
                records: Vec::new(),
                failure: Some(failure),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ProjectStore for MockProjectStore {
        async fn fetch_projects(
            &self,
            user_id: &UserId,
            role: Role,
        ) -> Result<Vec<Value>, ProjectStoreError> {
            self.seen.lock().unwrap().push((user_id.clone(), role));
            match self.failure {
                Some(make) => Err(make()),
                None => Ok(self.records.clone()),
            }
        }
    }

    fn test_query(role: Role) -> LoadDashboardQuery {
        LoadDashboardQuery {
            user_id: UserId::new("test-user-123").unwrap(),
            role,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_returns_store_records_unchanged() {
        let records = vec![json!({"id": "1"}), json!({"id": "2"})];
        let store = Arc::new(MockProjectStore::with_records(records.clone()));
        let handler = LoadDashboardHandler::new(store);

        let result = handler.handle(test_query(Role::Provider)).await.unwrap();
        assert_eq!(result, records);
    }

    #[tokio::test]
    async fn test_passes_user_and_role_to_store() {
        let store = Arc::new(MockProjectStore::with_records(vec![]));
        let handler = LoadDashboardHandler::new(store.clone());

        handler.handle(test_query(Role::Client)).await.unwrap();

        let seen = store.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_str(), "test-user-123");
        assert_eq!(seen[0].1, Role::Client);
    }

    #[tokio::test]
    async fn test_empty_store_is_not_an_error() {
        let store = Arc::new(MockProjectStore::with_records(vec![]));
        let handler = LoadDashboardHandler::new(store);

        let result = handler.handle(test_query(Role::Provider)).await;
        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_unavailable_store_maps_to_load_failure() {
        let store = Arc::new(MockProjectStore::failing(|| {
            ProjectStoreError::Unavailable("connection refused".to_string())
        }));
        let handler = LoadDashboardHandler::new(store);

        let result = handler.handle(test_query(Role::Provider)).await;
        assert_eq!(
            result,
            Err(LoadFailure::Unavailable("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_unauthorized_store_maps_to_load_failure() {
        let store = Arc::new(MockProjectStore::failing(|| ProjectStoreError::Unauthorized));
        let handler = LoadDashboardHandler::new(store);

        let result = handler.handle(test_query(Role::Client)).await;
        assert_eq!(result, Err(LoadFailure::Unauthorized));
    }
}
