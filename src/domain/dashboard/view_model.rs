//! DashboardViewModel - the read-only tuple handed to the renderer.

use serde::Serialize;

use super::errors::LoadErrorView;
use super::metrics::DashboardMetrics;
use crate::domain::foundation::Role;
use crate::domain::project::MilestoneSummary;

/// What the project list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardOutcome {
    /// A load is pending; any projects shown are the last known set.
    Loading,
    /// The last load failed. Distinct from an empty result.
    LoadFailed,
    /// Loaded, but nothing matches the current view mode.
    NoProjects,
    Projects,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel<P, V> {
    pub role: Role,
    /// Heading for the other party on each project card.
    pub counterparty_label: &'static str,
    pub view_mode: V,
    /// Projects visible under `view_mode`, in store order.
    pub projects: Vec<P>,
    /// One entry per element of `projects`, at the same index.
    pub milestone_summaries: Vec<MilestoneSummary>,
    /// Computed over the full set, independent of `view_mode`.
    pub metrics: DashboardMetrics,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<LoadErrorView>,
    /// Records dropped as malformed in the last successful load.
    pub rejected_count: usize,
    pub outcome: DashboardOutcome,
}

impl DashboardOutcome {
    /// Resolves the outcome; a failure outranks loading, loading outranks emptiness.
    pub fn resolve(loading: bool, failed: bool, visible: usize) -> Self {
        if failed {
            DashboardOutcome::LoadFailed
        } else if loading {
            DashboardOutcome::Loading
        } else if visible == 0 {
            DashboardOutcome::NoProjects
        } else {
            DashboardOutcome::Projects
        }
    }
}
