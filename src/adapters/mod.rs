//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - project store implementations (in-memory, file)

pub mod storage;

pub use storage::{build_project_store, FileProjectStore, InMemoryProjectStore};
