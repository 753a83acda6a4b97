//! View modes - the closed set of list filters a user can pick per role.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use crate::domain::foundation::{ProjectStatus, ValidationError};

/// Role-independent meaning of a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    InProgress,
    Completed,
    Everything,
}

impl StatusFilter {
    /// Returns true if a project with `status` is shown under this filter.
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::InProgress => status == ProjectStatus::InProgress,
            StatusFilter::Completed => status == ProjectStatus::Completed,
            StatusFilter::Everything => true,
        }
    }
}

/// A role's view-mode enumeration.
///
/// `Default` is the primary active mode the selector starts in.
pub trait ViewMode:
    Debug
    + Copy
    + Eq
    + Hash
    + Default
    + Serialize
    + FromStr<Err = ValidationError>
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Every mode, in toggle order.
    fn all() -> [Self; 3];

    fn status_filter(&self) -> StatusFilter;

    /// Toggle button label.
    fn label(&self) -> &'static str;

    /// Lowercase wire name.
    fn as_str(&self) -> &'static str;
}

fn unknown_mode(value: &str) -> ValidationError {
    ValidationError::invalid_format("view_mode", format!("unknown mode '{}'", value))
}

/// View modes on the provider dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderView {
    #[default]
    Hired,
    Completed,
    All,
}

impl ViewMode for ProviderView {
    fn all() -> [Self; 3] {
        [ProviderView::Hired, ProviderView::Completed, ProviderView::All]
    }

    fn status_filter(&self) -> StatusFilter {
        match self {
            ProviderView::Hired => StatusFilter::InProgress,
            ProviderView::Completed => StatusFilter::Completed,
            ProviderView::All => StatusFilter::Everything,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProviderView::Hired => "Active Hired",
            ProviderView::Completed => "Completed",
            ProviderView::All => "All Projects",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProviderView::Hired => "hired",
            ProviderView::Completed => "completed",
            ProviderView::All => "all",
        }
    }
}

impl FromStr for ProviderView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hired" => Ok(ProviderView::Hired),
            "completed" => Ok(ProviderView::Completed),
            "all" => Ok(ProviderView::All),
            other => Err(unknown_mode(other)),
        }
    }
}

impl fmt::Display for ProviderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View modes on the client dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientView {
    #[default]
    Active,
    Completed,
    All,
}

impl ViewMode for ClientView {
    fn all() -> [Self; 3] {
        [ClientView::Active, ClientView::Completed, ClientView::All]
    }

    fn status_filter(&self) -> StatusFilter {
        match self {
            ClientView::Active => StatusFilter::InProgress,
            ClientView::Completed => StatusFilter::Completed,
            ClientView::All => StatusFilter::Everything,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ClientView::Active => "Active",
            ClientView::Completed => "Completed",
            ClientView::All => "All Projects",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            ClientView::Active => "active",
            ClientView::Completed => "completed",
            ClientView::All => "all",
        }
    }
}

impl FromStr for ClientView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ClientView::Active),
            "completed" => Ok(ClientView::Completed),
            "all" => Ok(ClientView::All),
            other => Err(unknown_mode(other)),
        }
    }
}

impl fmt::Display for ClientView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
