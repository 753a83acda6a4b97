//! Project store adapters.
//!
//! - `InMemoryProjectStore` - in-memory, seedable with sample data
//! - `FileProjectStore` - JSON/YAML files on disk

mod file_project_store;
mod in_memory_project_store;
mod sample_projects;

pub use file_project_store::FileProjectStore;
pub use in_memory_project_store::InMemoryProjectStore;
pub use sample_projects::{sample_client_projects, sample_provider_projects};

use std::sync::Arc;
use tracing::info;

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::foundation::UserId;
use crate::ports::ProjectStore;

/// Builds the configured project store.
///
/// `seed_user` receives the sample data set when the in-memory backend is
/// configured to seed.
pub async fn build_project_store(config: &StoreConfig, seed_user: &UserId) -> Arc<dyn ProjectStore> {
    match (&config.backend, &config.data_dir) {
        (StoreBackend::File, Some(dir)) => {
            info!(data_dir = %dir.display(), "using file project store");
            Arc::new(FileProjectStore::new(dir))
        }
        _ if config.seed_sample_data => {
            info!(user = %seed_user, "using in-memory project store with sample data");
            Arc::new(InMemoryProjectStore::with_sample_data(seed_user).await)
        }
        _ => {
            info!("using empty in-memory project store");
            Arc::new(InMemoryProjectStore::new())
        }
    }
}
