//! Role of the authenticated user relative to the projects shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which side of a project the dashboard is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Service provider: sees the projects they were hired for.
    Provider,
    /// Client: sees the projects they commissioned.
    Client,
}

impl Role {
    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Provider => "provider",
            Role::Client => "client",
        }
    }

    /// Label for the other party on a project card.
    pub fn counterparty_label(&self) -> &'static str {
        match self {
            Role::Provider => "Client",
            Role::Client => "Provider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "provider" => Ok(Role::Provider),
            "client" => Ok(Role::Client),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}
