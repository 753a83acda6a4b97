//! Domain layer - pure types and rules, no I/O.

pub mod dashboard;
pub mod foundation;
pub mod project;
