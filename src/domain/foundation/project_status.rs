//! ProjectStatus enum shared by project records and their milestones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project or milestone.
///
/// The set is closed: a raw record carrying any other value is rejected at
/// ingestion rather than mapped to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    /// Returns true if work is underway.
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::InProgress)
    }

    /// Returns true if the work is delivered.
    pub fn is_completed(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Pending);
    }

    #[test]
    fn only_in_progress_is_active() {
        assert!(!ProjectStatus::Pending.is_active());
        assert!(ProjectStatus::InProgress.is_active());
        assert!(!ProjectStatus::Completed.is_active());
    }

    #[test]
    fn only_completed_is_completed() {
        assert!(!ProjectStatus::Pending.is_completed());
        assert!(!ProjectStatus::InProgress.is_completed());
        assert!(ProjectStatus::Completed.is_completed());
    }

    #[test]
    fn display_uses_badge_label() {
        assert_eq!(format!("{}", ProjectStatus::InProgress), "In Progress");
        assert_eq!(format!("{}", ProjectStatus::Completed), "Completed");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(serde_json::from_str::<ProjectStatus>("\"cancelled\"").is_err());
        assert!(serde_json::from_str::<ProjectStatus>("\"InProgress\"").is_err());
    }
}
