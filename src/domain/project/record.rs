//! ProjectRecord - one unit of commissioned work - and the capability trait
//! the dashboard engine reads records through.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::{Counterparty, Milestone, MilestoneSummary};
use crate::domain::foundation::{ProjectId, ProjectStatus, ValidationError};

/// Shape shared by both roles' records.
///
/// Records are immutable snapshots owned by the record store. Field names
/// serialize as camelCase; the store's snake_case spellings are accepted on
/// input, and the counterparty may arrive under `client` or `provider`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,

    /// Whole currency units; never scaled by the engine.
    #[serde(alias = "budget_amount")]
    pub budget_amount: u64,

    #[serde(alias = "created_at")]
    pub created_at: NaiveDate,

    #[serde(alias = "due_date")]
    pub due_date: NaiveDate,

    #[serde(alias = "client", alias = "provider")]
    pub counterparty: Counterparty,

    /// Preserved in supplied order.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl ProjectRecord {
    /// Checks the fields deserialization alone cannot guarantee.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::empty_field("id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if self.counterparty.full_name.trim().is_empty() {
            return Err(ValidationError::empty_field("counterparty.fullName"));
        }
        self.milestones.iter().try_for_each(Milestone::validate)
    }

    /// Returns true if the due date is not before the creation date.
    pub fn schedule_is_consistent(&self) -> bool {
        self.due_date >= self.created_at
    }

    pub fn milestone_summary(&self) -> MilestoneSummary {
        MilestoneSummary::from_milestones(&self.milestones)
    }
}

/// Capability interface the engine needs from a role-specific record.
///
/// The shared fields come from [`ProjectRecord`]; role-specific shapes wrap
/// it and add their own extensions.
pub trait RoleProject:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The shared record this project extends.
    fn record(&self) -> &ProjectRecord;

    /// Validates the record after deserialization.
    fn validate(&self) -> Result<(), ValidationError> {
        self.record().validate()
    }

    /// Upstream data-quality problems the engine reports but does not enforce.
    fn inconsistencies(&self) -> Vec<&'static str> {
        let mut found = Vec::new();
        if !self.record().schedule_is_consistent() {
            found.push("due date precedes creation date");
        }
        found
    }

    fn id(&self) -> &ProjectId {
        &self.record().id
    }

    fn status(&self) -> ProjectStatus {
        self.record().status
    }

    fn budget_amount(&self) -> u64 {
        self.record().budget_amount
    }

    fn created_at(&self) -> NaiveDate {
        self.record().created_at
    }

    fn due_date(&self) -> NaiveDate {
        self.record().due_date
    }
}

/// A provider's hired project is the shared record with no extension.
impl RoleProject for ProjectRecord {
    fn record(&self) -> &ProjectRecord {
        self
    }
}
