//! The other party on a project: the client for a provider, the provider for a client.

use serde::{Deserialize, Serialize};

/// Display identity of the counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    #[serde(alias = "full_name")]
    pub full_name: String,

    /// Reference to an avatar resource, if the counterparty has one.
    #[serde(default, alias = "profile_image", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// What to show in the counterparty's avatar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar<'a> {
    Image(&'a str),
    Initial(char),
}

impl Counterparty {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            profile_image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.profile_image = Some(image.into());
        self
    }

    /// Image reference when present and non-blank, otherwise the first
    /// character of the name.
    pub fn avatar(&self) -> Avatar<'_> {
        match self.profile_image.as_deref() {
            Some(image) if !image.trim().is_empty() => Avatar::Image(image),
            _ => Avatar::Initial(self.full_name.trim().chars().next().unwrap_or('?')),
        }
    }
}
