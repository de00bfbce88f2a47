//! Player configuration

use serde::{Deserialize, Serialize};

/// What `play_list` does with an index outside the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Fail with `PlayerError::IndexOutOfBounds` and leave the state alone
    #[default]
    Reject,

    /// Clamp to the last episode; an empty list unloads the player
    Clamp,
}

/// Configuration for the player state store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Out-of-range handling for `play_list` (default: Reject)
    pub index_policy: IndexPolicy,

    /// Force `is_playing = false` when the player is cleared (default: false)
    pub stop_on_clear: bool,

    /// Loop mode at startup (default: false)
    pub initial_looping: bool,

    /// Shuffle mode at startup (default: false)
    pub initial_shuffling: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            index_policy: IndexPolicy::Reject,
            stop_on_clear: false,
            initial_looping: false,
            initial_shuffling: false,
        }
    }
}
