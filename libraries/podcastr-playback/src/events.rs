//! Player Events
//!
//! Fine-grained change notifications for hosts that would rather poll than
//! subscribe. Events are queued on every state change and handed out by
//! `PlayerStateStore::drain_events`.

use crate::state::PlayerState;
use podcastr_core::EpisodeId;
use serde::{Deserialize, Serialize};

/// Events emitted by the player state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback was started or stopped
    PlayingChanged {
        /// The new value of `is_playing`
        is_playing: bool,
    },

    /// A (possibly identical) episode was selected for playback
    EpisodeChanged {
        /// Index of the selected episode
        index: usize,
        /// ID of the selected episode
        episode_id: Option<EpisodeId>,
        /// ID of the episode that was current before
        previous_episode_id: Option<EpisodeId>,
    },

    /// The playlist was replaced
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Loop mode toggled
    LoopChanged {
        /// The new value of `is_looping`
        is_looping: bool,
    },

    /// Shuffle mode toggled
    ShuffleChanged {
        /// The new value of `is_shuffling`
        is_shuffling: bool,
    },

    /// The player was emptied
    Cleared,
}

/// Events describing the step from `before` to `after`
pub(crate) fn diff_events(before: &PlayerState, after: &PlayerState) -> Vec<PlayerEvent> {
    let mut events = Vec::new();

    if before.playlist != after.playlist {
        events.push(PlayerEvent::PlaylistChanged {
            length: after.playlist.len(),
        });
    }

    if before.selection != after.selection {
        events.push(PlayerEvent::EpisodeChanged {
            index: after.current_index,
            episode_id: after.current_episode_id().cloned(),
            previous_episode_id: before.current_episode_id().cloned(),
        });
    }

    if before.is_playing != after.is_playing {
        events.push(PlayerEvent::PlayingChanged {
            is_playing: after.is_playing,
        });
    }

    if before.is_looping != after.is_looping {
        events.push(PlayerEvent::LoopChanged {
            is_looping: after.is_looping,
        });
    }

    if before.is_shuffling != after.is_shuffling {
        events.push(PlayerEvent::ShuffleChanged {
            is_shuffling: after.is_shuffling,
        });
    }

    events
}
