//! Player state and the snapshot handed to views

use podcastr_core::{Episode, EpisodeId};
use serde::{Deserialize, Serialize};

/// Stored player fields
///
/// Derived values (`current_episode`, `has_next`, `has_previous`) are
/// computed on every read and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Episodes currently loaded into the player
    pub playlist: Vec<Episode>,

    /// Index into `playlist`; `< playlist.len()` whenever the list is non-empty
    pub current_index: usize,

    /// Whether playback is active
    pub is_playing: bool,

    /// Whether the current episode repeats when it ends
    pub is_looping: bool,

    /// Whether "next" picks a random index
    pub is_shuffling: bool,

    /// Bumped every time an episode is (re)selected for playback, so views can
    /// tell "same index picked again" apart from "nothing happened"
    pub selection: u64,
}

impl PlayerState {
    /// Episode at `current_index`, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.playlist.get(self.current_index)
    }

    /// Whether "previous" would move
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether "next" would move
    ///
    /// Always false on an empty playlist, even with shuffle on.
    pub fn has_next(&self) -> bool {
        !self.playlist.is_empty()
            && (self.is_shuffling || self.current_index + 1 < self.playlist.len())
    }

    pub(crate) fn current_episode_id(&self) -> Option<&EpisodeId> {
        self.current_episode().map(|episode| &episode.id)
    }

    /// Build the read-only view of this state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            playlist: self.playlist.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            selection: self.selection,
            current_episode: self.current_episode().cloned(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

/// Read-only copy of the player state plus derived fields
///
/// Delivered to subscribers after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub playlist: Vec<Episode>,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub selection: u64,
    pub current_episode: Option<Episode>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        PlayerState::default().snapshot()
    }
}
