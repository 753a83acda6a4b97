//! Command and query handlers.

pub mod dashboard;

pub use dashboard::{
    DashboardController, DashboardEvent, LoadDashboardHandler, LoadDashboardQuery,
    LoadDashboardResult,
};
