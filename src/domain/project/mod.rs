//! Project module - the records the dashboards display.
//!
//! Both roles share [`ProjectRecord`]; the client's [`CommissionedProject`]
//! extends it with delivery progress. The engine reads either through the
//! [`RoleProject`] capability trait.

mod commissioned;
mod counterparty;
mod milestone;
mod record;

pub use commissioned::CommissionedProject;
pub use counterparty::{Avatar, Counterparty};
pub use milestone::{Milestone, MilestoneSummary, MilestoneTreatment};
pub use record::{ProjectRecord, RoleProject};

/// A provider's hired project.
pub type HiredProject = ProjectRecord;
