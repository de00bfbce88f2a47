//! Error types for the player

use thiserror::Error;

/// Player errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Requested playlist index is outside the list
    #[error("Index {index} out of bounds for playlist of {len} episodes")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A playlist with no episodes was handed to the player
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// The playback engine refused a command
    #[error("Playback engine error: {0}")]
    Engine(String),
}

impl PlayerError {
    /// Create an engine error
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
