//! DashboardController - drives one role's dashboard for one user.
//!
//! Owns the [`Dashboard`] state and routes renderer events to it. Loads go
//! through [`LoadDashboardHandler`]; the state decides what survives a
//! failure.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::load_dashboard::{LoadDashboardHandler, LoadDashboardQuery};
use crate::domain::dashboard::{Dashboard, DashboardRole, DashboardViewModel};
use crate::domain::foundation::UserId;
use crate::ports::ProjectStore;

/// Events raised by the dashboard's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent<V> {
    /// The user picked a view tab.
    SetViewMode(V),
    /// Fetch the project set again.
    Reload,
}

pub struct DashboardController<R: DashboardRole> {
    loader: LoadDashboardHandler,
    user_id: UserId,
    dashboard: Dashboard<R>,
}

impl<R: DashboardRole> DashboardController<R> {
    pub fn new(store: Arc<dyn ProjectStore>, user_id: UserId) -> Self {
        Self::with_initial_view(store, user_id, R::View::default())
    }

    pub fn with_initial_view(store: Arc<dyn ProjectStore>, user_id: UserId, view: R::View) -> Self {
        Self {
            loader: LoadDashboardHandler::new(store),
            user_id,
            dashboard: Dashboard::with_view(view),
        }
    }

    /// Fetches the project set and applies it to the dashboard.
    #[instrument(skip(self), fields(user = %self.user_id, role = %R::ROLE))]
    pub async fn reload(&mut self) {
        self.dashboard.begin_load();
        let query = LoadDashboardQuery {
            user_id: self.user_id.clone(),
            role: R::ROLE,
        };
        let result = self.loader.handle(query).await;
        self.dashboard.complete_load(result);
    }

    /// Switches the view mode. Returns true when the mode changed.
    pub fn set_view_mode(&mut self, mode: R::View) -> bool {
        self.dashboard.set_view_mode(mode)
    }

    pub async fn handle(&mut self, event: DashboardEvent<R::View>) {
        debug!(?event, role = %R::ROLE, "dashboard event");
        match event {
            DashboardEvent::SetViewMode(mode) => {
                self.set_view_mode(mode);
            }
            DashboardEvent::Reload => self.reload().await,
        }
    }

    pub fn view_model(&self) -> DashboardViewModel<R::Project, R::View> {
        self.dashboard.view_model()
    }

    pub fn dashboard(&self) -> &Dashboard<R> {
        &self.dashboard
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
