//! Episode types

use super::ids::EpisodeId;
use crate::format::{format_duration, format_published_at};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable podcast episode
///
/// Carries only what the player needs to display and play the episode.
/// Values are never mutated once loaded into a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier from the API
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Cover image locator
    pub thumbnail: String,

    /// Media locator handed to the playback engine
    pub url: String,

    /// Track length in whole seconds
    pub duration: u64,
}

impl Episode {
    /// Track length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Track length formatted as `HH:MM:SS`
    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}

/// Everything an episode page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDetails {
    /// Unique episode identifier from the API
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Cover image locator
    pub thumbnail: String,

    /// Media locator
    pub url: String,

    /// Track length in whole seconds
    pub duration: u64,

    /// Publication timestamp
    pub published_at: NaiveDateTime,

    /// HTML description, rendered as-is by the page
    pub description: String,
}

impl EpisodeDetails {
    /// Publication date formatted for display (`8 jan 21`)
    pub fn published_at_label(&self) -> String {
        format_published_at(&self.published_at)
    }

    /// Track length formatted as `HH:MM:SS`
    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }

    /// The player-facing subset of this episode
    pub fn to_episode(&self) -> Episode {
        Episode {
            id: self.id.clone(),
            title: self.title.clone(),
            members: self.members.clone(),
            thumbnail: self.thumbnail.clone(),
            url: self.url.clone(),
            duration: self.duration,
        }
    }
}

impl From<EpisodeDetails> for Episode {
    fn from(details: EpisodeDetails) -> Self {
        Self {
            id: details.id,
            title: details.title,
            members: details.members,
            thumbnail: details.thumbnail,
            url: details.url,
            duration: details.duration,
        }
    }
}
