//! Transport button state derived from a snapshot

use crate::state::PlayerSnapshot;
use podcastr_core::format_duration;
use serde::{Deserialize, Serialize};

/// Enablement and highlight state of the player's transport controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportControls {
    /// Shuffle needs an episode and more than one to pick from
    pub shuffle_enabled: bool,
    pub shuffle_active: bool,
    pub previous_enabled: bool,
    pub play_enabled: bool,
    /// Show the pause icon instead of play
    pub show_pause: bool,
    pub next_enabled: bool,
    pub loop_enabled: bool,
    pub loop_active: bool,
    /// Upper bound of the scrub slider, absent when nothing is loaded
    pub slider_max: Option<u64>,
}

impl TransportControls {
    /// Derive control state from a snapshot
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Self {
        let has_episode = snapshot.current_episode.is_some();

        Self {
            shuffle_enabled: has_episode && snapshot.playlist.len() > 1,
            shuffle_active: snapshot.is_shuffling,
            previous_enabled: has_episode && snapshot.has_previous,
            play_enabled: has_episode,
            show_pause: snapshot.is_playing,
            next_enabled: has_episode && snapshot.has_next,
            loop_enabled: has_episode,
            loop_active: snapshot.is_looping,
            slider_max: snapshot
                .current_episode
                .as_ref()
                .map(|episode| episode.duration),
        }
    }

    /// Label for the total-length readout (`00:00:00` when empty)
    pub fn duration_label(&self) -> String {
        format_duration(self.slider_max.unwrap_or(0))
    }
}

impl From<&PlayerSnapshot> for TransportControls {
    fn from(snapshot: &PlayerSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}
