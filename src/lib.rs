//! Hireboard - role-specific project dashboards
//!
//! A user who both hires and is hired sees two dashboards over their
//! projects: a provider view of engagements they were hired for and a
//! client view of work they commissioned. Each dashboard filters its
//! project set by view mode and summarizes it into status counts and a
//! total budget.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
