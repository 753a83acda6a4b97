//! Dashboard load and ingestion errors.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// The record store could not supply records.
///
/// Surfaced as its own state, distinct from a successful but empty load, and
/// retried only when the user asks for a reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("Project store unavailable: {0}")]
    Unavailable(String),

    #[error("Not authorized to load projects")]
    Unauthorized,

    #[error("Project store error: {0}")]
    Store(String),
}

impl LoadFailure {
    pub fn code(&self) -> ErrorCode {
        match self {
            LoadFailure::Unavailable(_) => ErrorCode::StoreUnavailable,
            LoadFailure::Unauthorized => ErrorCode::Unauthorized,
            LoadFailure::Store(_) => ErrorCode::StoreError,
        }
    }
}

/// Why a single raw record was excluded from the working set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Missing field, value outside its enum, wrong type, bad date.
    #[error("unreadable record: {0}")]
    Unreadable(String),

    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),

    /// An earlier record in the same load already used this id.
    #[error("duplicate project id")]
    DuplicateId,
}

/// A raw record rejected during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record #{index} ({}) rejected: {reason}", .id.as_deref().unwrap_or("no id"))]
pub struct MalformedRecord {
    /// Position in the supplied sequence.
    pub index: usize,
    /// The record's id, when it could be read.
    pub id: Option<String>,
    pub reason: MalformedReason,
}

impl MalformedRecord {
    pub fn code(&self) -> ErrorCode {
        match &self.reason {
            MalformedReason::Unreadable(_) => ErrorCode::MalformedRecord,
            MalformedReason::Invalid(e) => e.code(),
            MalformedReason::DuplicateId => ErrorCode::DuplicateRecord,
        }
    }
}

/// Serializable form of a load failure for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadErrorView {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&LoadFailure> for LoadErrorView {
    fn from(failure: &LoadFailure) -> Self {
        Self {
            code: failure.code(),
            message: failure.to_string(),
        }
    }
}
