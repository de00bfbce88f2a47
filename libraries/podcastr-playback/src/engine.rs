//! Platform-agnostic playback engine trait
//!
//! Abstracts the host media runtime (an HTML audio element in the browser, a
//! native player on desktop). Decoding and streaming stay on the host side.

use crate::error::Result;
use std::time::Duration;

/// Host media runtime driven by the player
///
/// Implementors own a single media element. The player tells it what to load
/// and whether to run; the host reports back through `EngineEvent`s.
pub trait PlaybackEngine {
    /// Load a new media resource, replacing the current one
    ///
    /// The engine must not start playing on its own after loading.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback
    fn start(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn stop(&mut self);

    /// Move the playback position
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Restart the current resource when it ends instead of reporting `Ended`
    fn set_looping(&mut self, looping: bool);

    /// Drop the current resource
    fn unload(&mut self);
}

/// Notifications from the playback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Resource metadata is available; playback position is at zero
    MetadataLoaded,

    /// Playback started, including starts triggered outside the player
    /// (media keys, OS controls)
    Started,

    /// Playback paused, including pauses triggered outside the player
    Paused,

    /// Reached the end of the resource
    Ended,

    /// Playback position moved
    PositionChanged {
        /// Current position from the start of the resource
        position: Duration,
    },
}
