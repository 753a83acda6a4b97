//! Dashboard - per-session state for one role's dashboard.
//!
//! Owns the working record set, the metrics derived from it, the view
//! selector and the load state. Metrics are recomputed only when the record
//! set changes; view changes only re-run the filter.

use serde_json::Value;
use tracing::{error, info};

use super::errors::{LoadErrorView, LoadFailure, MalformedRecord};
use super::filter::filter_projects;
use super::ingest::ingest_records;
use super::metrics::DashboardMetrics;
use super::role::DashboardRole;
use super::view_model::{DashboardOutcome, DashboardViewModel};
use super::view_selector::ViewSelector;
use crate::domain::project::RoleProject;

/// Where the dashboard is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight. Starts here: nothing has been loaded yet.
    Loading,
    Loaded,
    /// The last load failed; the previous record set is kept.
    Failed(LoadFailure),
}

/// One role's dashboard state.
pub struct Dashboard<R: DashboardRole> {
    projects: Vec<R::Project>,
    metrics: DashboardMetrics,
    selector: ViewSelector<R::View>,
    load_state: LoadState,
    rejected: Vec<MalformedRecord>,
}

impl<R: DashboardRole> Dashboard<R> {
    /// Empty dashboard in the role's primary view, awaiting its first load.
    pub fn new() -> Self {
        Self::with_view(R::View::default())
    }

    pub fn with_view(view: R::View) -> Self {
        Self {
            projects: Vec::new(),
            metrics: DashboardMetrics::default(),
            selector: ViewSelector::starting_at(view),
            load_state: LoadState::Loading,
            rejected: Vec::new(),
        }
    }

    /// Marks a load as pending. Last-known records stay visible.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Applies the result of a store fetch. The newest result always wins.
    pub fn complete_load(&mut self, result: Result<Vec<Value>, LoadFailure>) {
        match result {
            Ok(raw) => {
                let report = ingest_records::<R::Project>(raw);
                self.rejected = report.rejected;
                self.replace_projects(report.accepted);
                info!(
                    role = %R::ROLE,
                    projects = self.projects.len(),
                    rejected = self.rejected.len(),
                    "dashboard loaded"
                );
            }
            Err(failure) => {
                error!(role = %R::ROLE, code = %failure.code(), "dashboard load failed: {}", failure);
                self.load_state = LoadState::Failed(failure);
            }
        }
    }

    /// Installs an already-validated record set.
    pub fn replace_projects(&mut self, projects: Vec<R::Project>) {
        self.metrics = DashboardMetrics::aggregate(&projects);
        self.projects = projects;
        self.load_state = LoadState::Loaded;
    }

    /// Changes the view mode; returns true if it changed.
    pub fn set_view_mode(&mut self, mode: R::View) -> bool {
        self.selector.select(mode)
    }

    pub fn view_mode(&self) -> R::View {
        self.selector.current()
    }

    /// Every loaded project, regardless of view mode.
    pub fn projects(&self) -> &[R::Project] {
        &self.projects
    }

    /// Projects visible under the current view mode.
    pub fn visible_projects(&self) -> Vec<&R::Project> {
        filter_projects(&self.projects, self.selector.current())
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn load_failure(&self) -> Option<&LoadFailure> {
        match &self.load_state {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Records dropped from the last successful load.
    pub fn rejected(&self) -> &[MalformedRecord] {
        &self.rejected
    }

    /// Builds the renderer's view model from the current state.
    pub fn view_model(&self) -> DashboardViewModel<R::Project, R::View> {
        let projects: Vec<R::Project> = self.visible_projects().into_iter().cloned().collect();
        let loading = self.is_loading();
        let failure = self.load_failure();

        let milestone_summaries = projects
            .iter()
            .map(|p| p.record().milestone_summary())
            .collect();

        DashboardViewModel {
            role: R::ROLE,
            counterparty_label: R::ROLE.counterparty_label(),
            view_mode: self.view_mode(),
            outcome: DashboardOutcome::resolve(loading, failure.is_some(), projects.len()),
            projects,
            milestone_summaries,
            metrics: self.metrics,
            loading,
            load_error: failure.map(LoadErrorView::from),
            rejected_count: self.rejected.len(),
        }
    }
}

impl<R: DashboardRole> Default for Dashboard<R> {
    fn default() -> Self {
        Self::new()
    }
}
