//! Dashboard module - the project-state aggregation and view-filter engine.
//!
//! One generic engine serves both roles through [`DashboardRole`]:
//! ingestion validates raw records, the filter selects what a view mode
//! shows, and the aggregator derives metrics over the full set.

pub mod errors;
pub mod filter;
pub mod ingest;
pub mod metrics;
pub mod role;
pub mod state;
pub mod view_mode;
pub mod view_model;
pub mod view_selector;

pub use errors::{LoadErrorView, LoadFailure, MalformedReason, MalformedRecord};
pub use filter::{filter_by_status, filter_projects};
pub use ingest::{ingest_records, IngestReport};
pub use metrics::{aggregate, DashboardMetrics};
pub use role::{ClientRole, DashboardRole, ProviderRole};
pub use state::{Dashboard, LoadState};
pub use view_mode::{ClientView, ProviderView, StatusFilter, ViewMode};
pub use view_model::{DashboardOutcome, DashboardViewModel};
pub use view_selector::ViewSelector;
