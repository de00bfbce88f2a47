//! Player state store - the single source of truth for what is playing
//!
//! Views never touch `PlayerState` directly: they issue commands here and
//! react to the snapshots the store pushes to its subscribers.

use crate::{
    error::{PlayerError, Result},
    events::{diff_events, PlayerEvent},
    shuffle::{IndexPicker, RandomIndex},
    state::{PlayerSnapshot, PlayerState},
    types::{IndexPolicy, PlayerConfig},
};
use podcastr_core::Episode;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

/// Store shared across the views of a single UI thread
pub type SharedPlayerStore = Rc<RefCell<PlayerStateStore>>;

type Listener = Box<dyn FnMut(&PlayerSnapshot)>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Central player state
///
/// Holds the playlist, the active index and the playback flags. Every
/// operation is callable from every state; operations that change nothing
/// notify nobody.
///
/// ```rust
/// use podcastr_core::{Episode, EpisodeId};
/// use podcastr_playback::PlayerStateStore;
///
/// let episode = Episode {
///     id: EpisodeId::new("ep-1"),
///     title: "Faladev #30".to_string(),
///     members: "Diego e Richard".to_string(),
///     thumbnail: "https://example.com/ep-1.jpg".to_string(),
///     url: "https://example.com/ep-1.m4a".to_string(),
///     duration: 3981,
/// };
///
/// let mut store = PlayerStateStore::default();
/// store.play(episode.clone());
///
/// assert!(store.is_playing());
/// assert_eq!(store.current_episode(), Some(&episode));
/// assert!(!store.has_next());
/// ```
pub struct PlayerStateStore {
    state: PlayerState,
    config: PlayerConfig,
    picker: Box<dyn IndexPicker>,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,

    // Event queue for hosts that poll
    pending_events: Vec<PlayerEvent>,
}

impl PlayerStateStore {
    /// Create a store with random shuffle selection
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_picker(config, RandomIndex)
    }

    /// Create a store with a custom shuffle index source
    pub fn with_picker(config: PlayerConfig, picker: impl IndexPicker + 'static) -> Self {
        let state = PlayerState {
            is_looping: config.initial_looping,
            is_shuffling: config.initial_shuffling,
            ..PlayerState::default()
        };

        Self {
            state,
            config,
            picker: Box::new(picker),
            listeners: Vec::new(),
            next_subscription: 0,
            pending_events: Vec::new(),
        }
    }

    /// Wrap the store for sharing between views
    pub fn into_shared(self) -> SharedPlayerStore {
        Rc::new(RefCell::new(self))
    }

    // ===== Commands =====

    /// Play a single episode
    ///
    /// Replaces the playlist with `[episode]` and starts playback.
    pub fn play(&mut self, episode: Episode) {
        debug!(episode_id = %episode.id, "Play episode");

        self.update(|state| {
            state.playlist = vec![episode];
            state.current_index = 0;
            state.is_playing = true;
            state.selection = state.selection.wrapping_add(1);
        });
    }

    /// Play `list` starting at `index`
    ///
    /// Out-of-range indices follow `PlayerConfig::index_policy`: `Reject`
    /// returns an error and changes nothing, `Clamp` plays the last episode
    /// (or unloads the player for an empty list).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        let len = list.len();

        let index = match self.config.index_policy {
            IndexPolicy::Reject => {
                if len == 0 {
                    warn!("Rejected empty playlist");
                    return Err(PlayerError::EmptyPlaylist);
                }
                if index >= len {
                    warn!(index, len, "Rejected out-of-range playlist index");
                    return Err(PlayerError::IndexOutOfBounds { index, len });
                }
                index
            }
            IndexPolicy::Clamp => {
                if len == 0 {
                    debug!("Empty playlist, unloading player");
                    self.update(|state| {
                        state.playlist.clear();
                        state.current_index = 0;
                        state.is_playing = false;
                    });
                    return Ok(());
                }
                if index >= len {
                    debug!(index, len, "Clamped playlist index");
                }
                index.min(len - 1)
            }
        };

        debug!(len, index, "Play list");

        self.update(|state| {
            state.playlist = list;
            state.current_index = index;
            state.is_playing = true;
            state.selection = state.selection.wrapping_add(1);
        });

        Ok(())
    }

    /// Flip `is_playing`
    pub fn toggle_play(&mut self) {
        self.update(|state| state.is_playing = !state.is_playing);
    }

    /// Flip `is_looping`
    pub fn toggle_loop(&mut self) {
        self.update(|state| state.is_looping = !state.is_looping);
    }

    /// Flip `is_shuffling`
    pub fn toggle_shuffle(&mut self) {
        self.update(|state| state.is_shuffling = !state.is_shuffling);
    }

    /// Set `is_playing` without toggling
    ///
    /// Used to reconcile play/pause reported by the playback engine itself.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.update(|state| state.is_playing = playing);
    }

    /// Advance to the next episode
    ///
    /// With shuffle on, draws a uniformly random index (the current episode
    /// may be drawn again). Otherwise moves forward by one if possible.
    pub fn play_next(&mut self) {
        if self.state.is_shuffling {
            let len = self.state.playlist.len();
            if len == 0 {
                return;
            }

            // Keep the index valid even if a custom picker misbehaves
            let next = self.picker.pick(len).min(len - 1);
            debug!(index = next, len, "Shuffle next");

            self.update(|state| {
                state.current_index = next;
                state.selection = state.selection.wrapping_add(1);
            });
        } else if self.state.has_next() {
            self.update(|state| {
                state.current_index += 1;
                state.selection = state.selection.wrapping_add(1);
            });
        }
    }

    /// Go back to the previous episode, if there is one
    pub fn play_previous(&mut self) {
        if self.state.has_previous() {
            self.update(|state| {
                state.current_index -= 1;
                state.selection = state.selection.wrapping_add(1);
            });
        }
    }

    /// Empty the playlist
    ///
    /// `is_playing` is left as it was unless `PlayerConfig::stop_on_clear`
    /// is set, so by default the store can report "playing" with no episode.
    pub fn clear_player_state(&mut self) {
        let stop = self.config.stop_on_clear;

        let changed = self.update(|state| {
            state.playlist.clear();
            state.current_index = 0;
            if stop {
                state.is_playing = false;
            }
        });

        if changed {
            self.pending_events.push(PlayerEvent::Cleared);
        }
    }

    // ===== State Queries =====

    /// Stored state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Stored and derived state, detached from the store
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.state.snapshot()
    }

    /// Active configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn playlist(&self) -> &[Episode] {
        &self.state.playlist
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current_episode()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.state.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.state.is_shuffling
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    // ===== Subscriptions =====

    /// Register a listener called with a fresh snapshot after every change
    ///
    /// Listeners get a shared reference only and cannot call back into the
    /// store while it is notifying.
    pub fn subscribe(&mut self, listener: impl FnMut(&PlayerSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are queued events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Apply a mutation, then queue events and notify if anything changed
    fn update(&mut self, mutate: impl FnOnce(&mut PlayerState)) -> bool {
        let before = self.state.clone();
        mutate(&mut self.state);

        if self.state == before {
            return false;
        }

        debug_assert!(
            self.state.playlist.is_empty() || self.state.current_index < self.state.playlist.len()
        );

        self.pending_events
            .extend(diff_events(&before, &self.state));
        self.notify();
        true
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let snapshot = self.state.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for PlayerStateStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerStateStore")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .field("pending_events", &self.pending_events.len())
            .finish()
    }
}
