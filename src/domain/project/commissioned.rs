//! CommissionedProject - the client's view of a project, with delivery progress.

use serde::{Deserialize, Serialize};

use super::{ProjectRecord, RoleProject};
use crate::domain::foundation::Percentage;

/// A project the client commissioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionedProject {
    #[serde(flatten)]
    pub record: ProjectRecord,

    /// Delivery progress reported by the provider.
    #[serde(alias = "progress", alias = "progress_percent")]
    pub progress_percent: Percentage,
}

impl CommissionedProject {
    pub fn new(record: ProjectRecord, progress_percent: Percentage) -> Self {
        Self {
            record,
            progress_percent,
        }
    }

    /// A completed project should report full progress.
    ///
    /// Only the completed => 100% direction is checked; an in-progress project
    /// may sit at 100% while awaiting sign-off.
    pub fn is_progress_consistent(&self) -> bool {
        !self.record.status.is_completed() || self.progress_percent.is_full()
    }
}

impl RoleProject for CommissionedProject {
    fn record(&self) -> &ProjectRecord {
        &self.record
    }

    fn inconsistencies(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if !self.record.schedule_is_consistent() {
            found.push("due date precedes creation date");
        }
        if !self.is_progress_consistent() {
            found.push("completed project reports progress below 100%");
        }
        found
    }
}
