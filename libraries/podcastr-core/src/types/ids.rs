/// ID types for Podcastr entities
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode identifier
///
/// Opaque to the player; the API uses slugs such as
/// `a-importancia-da-contribuicao-em-open-source`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create an episode ID, rejecting blank input
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EpisodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for EpisodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
