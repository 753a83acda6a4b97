//! Metrics aggregator - summary statistics over a whole record set.
//!
//! Metrics are always computed over the full loaded set and never depend on
//! the selected view mode.

use serde::Serialize;

use crate::domain::foundation::{Percentage, ProjectStatus};
use crate::domain::project::RoleProject;

/// Summary counts and totals shown in the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Projects in progress.
    pub active_count: usize,
    /// Projects delivered.
    pub completed_count: usize,
    /// Projects not yet started.
    pub pending_count: usize,
    /// Every project in the set.
    pub total_count: usize,
    /// Sum of budgets in whole units. Earnings for a provider, spend for a client.
    pub total_budget: u128,
}

impl DashboardMetrics {
    /// Aggregates over every supplied project.
    ///
    /// Uses exact integer arithmetic; the u128 accumulator cannot overflow
    /// for any slice of u64 budgets.
    pub fn aggregate<P: RoleProject>(projects: &[P]) -> Self {
        projects.iter().fold(Self::default(), |mut m, p| {
            match p.status() {
                ProjectStatus::InProgress => m.active_count += 1,
                ProjectStatus::Completed => m.completed_count += 1,
                ProjectStatus::Pending => m.pending_count += 1,
            }
            m.total_count += 1;
            m.total_budget += u128::from(p.budget_amount());
            m
        })
    }

    /// Share of projects completed, rounded down; zero for an empty set.
    pub fn completion_rate(&self) -> Percentage {
        Percentage::ratio(self.completed_count, self.total_count)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Free-function form of [`DashboardMetrics::aggregate`].
pub fn aggregate<P: RoleProject>(projects: &[P]) -> DashboardMetrics {
    DashboardMetrics::aggregate(projects)
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
