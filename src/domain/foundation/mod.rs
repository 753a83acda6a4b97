//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the dashboard domain.

mod errors;
mod ids;
mod percentage;
mod project_status;
mod role;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ProjectId, UserId};
pub use percentage::Percentage;
pub use project_status::ProjectStatus;
pub use role::Role;
