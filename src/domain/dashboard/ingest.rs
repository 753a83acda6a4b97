//! Record ingestion - turns raw store records into typed projects.
//!
//! Each raw record is checked on its own. A record that cannot be read,
//! fails validation, or repeats an earlier id is rejected and reported; the
//! rest of the load proceeds.

use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::errors::{MalformedReason, MalformedRecord};
use crate::domain::project::RoleProject;

/// Outcome of ingesting one load.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport<P> {
    /// Accepted projects, in supplied order.
    pub accepted: Vec<P>,
    pub rejected: Vec<MalformedRecord>,
}

impl<P> IngestReport<P> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates `raw` records into `P`, keeping the first record for each id.
pub fn ingest_records<P: RoleProject>(raw: Vec<Value>) -> IngestReport<P> {
    let supplied = raw.len();
    let mut accepted: Vec<P> = Vec::with_capacity(supplied);
    let mut rejected = Vec::new();
    let mut seen = HashSet::new();

    for (index, value) in raw.into_iter().enumerate() {
        let id = raw_id(&value);
        match read_record::<P>(value) {
            Ok(project) => {
                if !seen.insert(project.id().clone()) {
                    rejected.push(MalformedRecord {
                        index,
                        id,
                        reason: MalformedReason::DuplicateId,
                    });
                    continue;
                }
                for problem in project.inconsistencies() {
                    warn!(project_id = %project.id(), problem, "inconsistent project data");
                }
                accepted.push(project);
            }
            Err(reason) => rejected.push(MalformedRecord { index, id, reason }),
        }
    }

    for record in &rejected {
        warn!(index = record.index, code = %record.code(), "{}", record);
    }
    debug!(
        supplied,
        accepted = accepted.len(),
        rejected = rejected.len(),
        "ingested project records"
    );

    IngestReport { accepted, rejected }
}

fn read_record<P: RoleProject>(value: Value) -> Result<P, MalformedReason> {
    let project: P =
        serde_json::from_value(value).map_err(|e| MalformedReason::Unreadable(e.to_string()))?;
    project.validate()?;
    Ok(project)
}

/// Best-effort id for diagnostics on records that may not deserialize.
fn raw_id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::project::{CommissionedProject, ProjectRecord};
    use serde_json::json;

    fn hired(id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "title": "Brand Identity Design",
            "description": "Logo, colors and guidelines",
            "status": status,
            "budget_amount": 2500000,
            "created_at": "2025-01-15",
            "due_date": "2025-02-15",
            "client": { "full_name": "John Doe" }
        })
    }

    #[test]
    fn accepts_well_formed_records_in_order() {
        let report = ingest_records::<ProjectRecord>(vec![
            hired("1", "in_progress"),
            hired("2", "completed"),
            hired("3", "pending"),
        ]);

        assert!(report.is_clean());
        let ids: Vec<&str> = report.accepted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn rejects_status_outside_enum_without_failing_the_load() {
        let report = ingest_records::<ProjectRecord>(vec![
            hired("1", "in_progress"),
            hired("2", "on_hold"),
            hired("3", "completed"),
        ]);

        assert_eq!(report.accepted.len(), 2);
        assert_eq!(report.rejected.len(), 1);
        let rejected = &report.rejected[0];
        assert_eq!(rejected.index, 1);
        assert_eq!(rejected.id.as_deref(), Some("2"));
        assert!(matches!(rejected.reason, MalformedReason::Unreadable(_)));
        assert_eq!(rejected.code(), ErrorCode::MalformedRecord);
    }

    #[test]
    fn rejects_record_missing_required_field() {
        let mut raw = hired("1", "in_progress");
        raw.as_object_mut().unwrap().remove("due_date");

        let report = ingest_records::<ProjectRecord>(vec![raw]);

        assert!(report.accepted.is_empty());
        assert_eq!(report.rejected.len(), 1);
    }

    #[test]
    fn rejects_blank_title_as_invalid() {
        let mut raw = hired("1", "in_progress");
        raw["title"] = json!("");

        let report = ingest_records::<ProjectRecord>(vec![raw]);

        assert!(matches!(report.rejected[0].reason, MalformedReason::Invalid(_)));
        assert_eq!(report.rejected[0].code(), ErrorCode::EmptyField);
    }

    #[test]
    fn keeps_first_of_duplicate_ids() {
        let mut second = hired("1", "completed");
        second["title"] = json!("Duplicate");

        let report = ingest_records::<ProjectRecord>(vec![hired("1", "in_progress"), second]);

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.accepted[0].title, "Brand Identity Design");
        assert_eq!(report.rejected[0].reason, MalformedReason::DuplicateId);
    }

    #[test]
    fn non_object_values_are_rejected() {
        let report = ingest_records::<ProjectRecord>(vec![json!("nope"), json!(42)]);

        assert!(report.accepted.is_empty());
        assert_eq!(report.rejected.len(), 2);
        assert!(report.rejected.iter().all(|r| r.id.is_none()));
    }

    #[test]
    fn integer_ids_are_accepted_in_string_form() {
        let mut raw = hired("1", "in_progress");
        raw["id"] = json!(7);

        let report = ingest_records::<ProjectRecord>(vec![raw]);

        assert!(report.is_clean());
        assert_eq!(report.accepted[0].id.as_str(), "7");
    }

    #[test]
    fn integer_and_string_forms_of_an_id_are_duplicates() {
        let mut numeric = hired("1", "in_progress");
        numeric["id"] = json!(7);
        let textual = hired("7", "completed");

        let report = ingest_records::<ProjectRecord>(vec![numeric, textual]);

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.rejected[0].index, 1);
        assert_eq!(report.rejected[0].reason, MalformedReason::DuplicateId);
    }

    #[test]
    fn client_records_require_progress() {
        let mut with_progress = hired("1", "in_progress");
        with_progress["progress"] = json!(65);
        let without_progress = hired("2", "in_progress");

        let report =
            ingest_records::<CommissionedProject>(vec![with_progress, without_progress]);

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.accepted[0].progress_percent.value(), 65);
        assert_eq!(report.rejected[0].index, 1);
    }

    #[test]
    fn empty_input_is_a_clean_empty_report() {
        let report = ingest_records::<ProjectRecord>(vec![]);
        assert!(report.accepted.is_empty());
        assert!(report.is_clean());
    }
}
