//! Filter function - selects the projects shown under a view mode.

use super::view_mode::{StatusFilter, ViewMode};
use crate::domain::project::RoleProject;

/// Returns the projects visible under `mode`, in their original order.
///
/// Total and side-effect free. An empty result is a valid answer, not an
/// error; the presentation layer turns it into its empty state.
pub fn filter_projects<P, V>(projects: &[P], mode: V) -> Vec<&P>
where
    P: RoleProject,
    V: ViewMode,
{
    filter_by_status(projects, mode.status_filter())
}

/// Same as [`filter_projects`] for an already-resolved [`StatusFilter`].
pub fn filter_by_status<P: RoleProject>(projects: &[P], filter: StatusFilter) -> Vec<&P> {
    projects
        .iter()
        .filter(|p| filter.matches(p.status()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{ClientView, ProviderView};
    use crate::domain::foundation::{ProjectId, ProjectStatus};
    use crate::domain::project::{Counterparty, ProjectRecord};

    fn project(id: &str, status: ProjectStatus) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(id).unwrap(),
            title: format!("Project {}", id),
            description: "desc".to_string(),
            status,
            budget_amount: 1_000,
            created_at: "2025-01-01".parse().unwrap(),
            due_date: "2025-02-01".parse().unwrap(),
            counterparty: Counterparty::new("Someone"),
            milestones: vec![],
        }
    }

    fn ids(projects: &[&ProjectRecord]) -> Vec<String> {
        projects.iter().map(|p| p.id.to_string()).collect()
    }

    fn mixed() -> Vec<ProjectRecord> {
        vec![
            project("a", ProjectStatus::InProgress),
            project("b", ProjectStatus::Completed),
            project("c", ProjectStatus::Pending),
            project("d", ProjectStatus::InProgress),
            project("e", ProjectStatus::Completed),
        ]
    }

    #[test]
    fn hired_keeps_in_progress_in_order() {
        let projects = mixed();
        assert_eq!(ids(&filter_projects(&projects, ProviderView::Hired)), vec!["a", "d"]);
    }

    #[test]
    fn completed_keeps_completed_in_order() {
        let projects = mixed();
        assert_eq!(ids(&filter_projects(&projects, ClientView::Completed)), vec!["b", "e"]);
    }

    #[test]
    fn all_is_identity() {
        let projects = mixed();
        let all = filter_projects(&projects, ProviderView::All);
        assert_eq!(all.len(), projects.len());
        assert!(all.iter().zip(projects.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn pending_only_visible_under_all() {
        let projects = vec![project("p", ProjectStatus::Pending)];
        assert!(filter_projects(&projects, ProviderView::Hired).is_empty());
        assert!(filter_projects(&projects, ProviderView::Completed).is_empty());
        assert_eq!(filter_projects(&projects, ProviderView::All).len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_output_for_every_mode() {
        let projects: Vec<ProjectRecord> = vec![];
        for mode in ClientView::all() {
            assert!(filter_projects(&projects, mode).is_empty());
        }
    }
}
