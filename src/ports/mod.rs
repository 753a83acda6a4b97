//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProjectStore` - supplies a user's raw project records per role

mod project_store;

pub use project_store::{ProjectStore, ProjectStoreError};
