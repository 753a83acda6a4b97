//! Dashboard handlers.
//!
//! The loader queries the project store; the controller owns a role's
//! dashboard state and applies renderer events to it.

mod dashboard_controller;
mod load_dashboard;

pub use dashboard_controller::{DashboardController, DashboardEvent};
pub use load_dashboard::{LoadDashboardHandler, LoadDashboardQuery, LoadDashboardResult};
