//! Dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dashboard::{ClientView, ProviderView};

/// Dashboard defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Initial view mode for provider dashboards
    #[serde(default)]
    pub default_provider_view: ProviderView,

    /// Initial view mode for client dashboards
    #[serde(default)]
    pub default_client_view: ClientView,

    /// User whose dashboards the binary renders
    #[serde(default = "default_snapshot_user")]
    pub snapshot_user: String,
}

impl DashboardConfig {
    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_user.trim().is_empty() {
            return Err(ValidationError::EmptySnapshotUser);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_provider_view: ProviderView::default(),
            default_client_view: ClientView::default(),
            snapshot_user: default_snapshot_user(),
        }
    }
}

fn default_snapshot_user() -> String {
    "demo-user".to_string()
}
