//! Milestones - sub-deliverables with their own status and due date.
//!
//! A milestone's treatment depends only on its own status. A parent record
//! in progress may hold milestones in every state at once, and the parent's
//! status is never derived from (or reconciled with) its milestones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProjectStatus, ValidationError};

/// One sub-deliverable of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,
    pub status: ProjectStatus,
    #[serde(alias = "due_date")]
    pub due_date: NaiveDate,
}

/// How a milestone is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneTreatment {
    /// Delivered; rendered struck through.
    Done,
    /// Being worked on now.
    Current,
    /// Not started.
    Upcoming,
}

impl Milestone {
    pub fn new(title: impl Into<String>, status: ProjectStatus, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            status,
            due_date,
        }
    }

    pub fn treatment(&self) -> MilestoneTreatment {
        match self.status {
            ProjectStatus::Completed => MilestoneTreatment::Done,
            ProjectStatus::InProgress => MilestoneTreatment::Current,
            ProjectStatus::Pending => MilestoneTreatment::Upcoming,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("milestones.title"));
        }
        Ok(())
    }
}

/// Per-status milestone counts for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSummary {
    pub done: usize,
    pub current: usize,
    pub upcoming: usize,
}

impl MilestoneSummary {
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        milestones
            .iter()
            .fold(Self::default(), |mut summary, m| {
                match m.treatment() {
                    MilestoneTreatment::Done => summary.done += 1,
                    MilestoneTreatment::Current => summary.current += 1,
                    MilestoneTreatment::Upcoming => summary.upcoming += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.done + self.current + self.upcoming
    }
}
