//! Two-way sync between the player state store and a playback engine
//!
//! Store → engine: `PlayerBridge::sync` runs on every snapshot and loads,
//! starts, stops or loops the engine to match it. A newly loaded episode
//! always starts, like an `<audio autoplay>` element switching `src`.
//!
//! Engine → store: `PlayerBridge::dispatch` feeds engine notifications back,
//! so a pause from media keys flips `is_playing` instead of drifting.

use crate::{
    engine::{EngineEvent, PlaybackEngine},
    error::{PlayerError, Result},
    state::PlayerSnapshot,
    store::{PlayerStateStore, SubscriptionId},
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

/// Keeps one playback engine in step with the player state
#[derive(Debug)]
pub struct PlayerBridge<E: PlaybackEngine> {
    engine: E,

    /// Selection counter of the episode currently loaded into the engine
    loaded_selection: Option<u64>,
    engine_running: bool,
    looping: bool,

    /// `is_playing` of the last synced snapshot
    playing_seen: bool,

    // Scrubber position and length, in whole seconds
    progress: u64,
    duration: u64,

    last_error: Option<PlayerError>,
}

impl<E: PlaybackEngine> PlayerBridge<E> {
    /// Wrap an engine; nothing is loaded until the first `sync`
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            loaded_selection: None,
            engine_running: false,
            looping: false,
            playing_seen: false,
            progress: 0,
            duration: 0,
            last_error: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Displayed playback position in whole seconds
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Length of the loaded episode in whole seconds (0 when unloaded)
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Whether the bridge believes the engine is running
    pub fn is_engine_running(&self) -> bool {
        self.engine_running
    }

    /// Take the last error raised while syncing from a subscription
    pub fn take_error(&mut self) -> Option<PlayerError> {
        self.last_error.take()
    }

    /// Bring the engine in line with a snapshot
    ///
    /// Loading a new selection starts the engine even when the store is
    /// paused; the engine's `Started` notification then reconciles the store.
    /// The engine is only stopped when `is_playing` turns false.
    pub fn sync(&mut self, snapshot: &PlayerSnapshot) -> Result<()> {
        let was_playing = std::mem::replace(&mut self.playing_seen, snapshot.is_playing);

        let Some(episode) = &snapshot.current_episode else {
            if self.loaded_selection.take().is_some() {
                debug!("Player emptied, unloading engine");
                self.engine.unload();
            }
            self.engine_running = false;
            self.progress = 0;
            self.duration = 0;
            return Ok(());
        };

        if self.looping != snapshot.is_looping {
            self.engine.set_looping(snapshot.is_looping);
            self.looping = snapshot.is_looping;
        }

        let loaded = self.loaded_selection != Some(snapshot.selection);
        if loaded {
            debug!(episode_id = %episode.id, url = %episode.url, "Loading episode");
            self.engine.load(&episode.url)?;
            self.loaded_selection = Some(snapshot.selection);
            self.engine_running = false;
            self.progress = 0;
            self.duration = episode.duration;
        }

        if (loaded || snapshot.is_playing) && !self.engine_running {
            self.engine.start()?;
            self.engine_running = true;
        } else if was_playing && !snapshot.is_playing && self.engine_running {
            self.engine.stop();
            self.engine_running = false;
        }

        Ok(())
    }

    /// Scrub to `seconds`, clamped to the episode length
    ///
    /// Does nothing when no episode is loaded.
    pub fn seek(&mut self, seconds: u64) -> Result<()> {
        if self.loaded_selection.is_none() {
            return Ok(());
        }

        let target = seconds.min(self.duration);
        self.engine.seek(Duration::from_secs(target))?;
        self.progress = target;
        Ok(())
    }

    /// Bridge-side handling of an engine notification
    ///
    /// Returns true when the event must also reach the store.
    pub fn on_engine_event(&mut self, event: EngineEvent) -> Result<bool> {
        match event {
            EngineEvent::MetadataLoaded => {
                self.progress = 0;
                Ok(false)
            }
            EngineEvent::PositionChanged { position } => {
                let secs = position.as_secs();
                self.progress = if self.duration > 0 {
                    secs.min(self.duration)
                } else {
                    secs
                };
                Ok(false)
            }
            EngineEvent::Started => {
                self.engine_running = true;
                Ok(true)
            }
            EngineEvent::Paused => {
                self.engine_running = false;
                Ok(true)
            }
            EngineEvent::Ended => {
                if self.looping {
                    // Engines that report an end despite looping get restarted here
                    self.engine.seek(Duration::ZERO)?;
                    self.engine.start()?;
                    self.engine_running = true;
                    self.progress = 0;
                    return Ok(false);
                }
                self.engine_running = false;
                Ok(true)
            }
        }
    }
}

impl<E: PlaybackEngine + 'static> PlayerBridge<E> {
    /// Subscribe a shared bridge to the store and sync it once right away
    ///
    /// The subscription holds a weak reference; dropping the bridge turns it
    /// into a no-op.
    pub fn attach(bridge: &Rc<RefCell<Self>>, store: &mut PlayerStateStore) -> SubscriptionId {
        {
            let mut bridge = bridge.borrow_mut();
            if let Err(e) = bridge.sync(&store.snapshot()) {
                warn!(error = %e, "Initial engine sync failed");
                bridge.last_error = Some(e);
            }
        }

        let weak = Rc::downgrade(bridge);
        store.subscribe(move |snapshot| {
            let Some(bridge) = weak.upgrade() else {
                return;
            };
            let Ok(mut bridge) = bridge.try_borrow_mut() else {
                warn!("Bridge busy, skipped engine sync");
                return;
            };
            if let Err(e) = bridge.sync(snapshot) {
                warn!(error = %e, "Engine sync failed");
                bridge.last_error = Some(e);
            }
        })
    }

    /// Route an engine notification through the bridge and into the store
    ///
    /// The bridge borrow is released before the store is touched, so the
    /// store's notification can sync the same bridge. When the event made the
    /// engine start the next episode, the store is marked playing again.
    pub fn dispatch(
        bridge: &RefCell<Self>,
        store: &mut PlayerStateStore,
        event: EngineEvent,
    ) -> Result<()> {
        let forward = bridge.borrow_mut().on_engine_event(event)?;
        if !forward {
            return Ok(());
        }

        apply_engine_event(store, event);

        let running = bridge.borrow().engine_running;
        if running && !store.is_playing() {
            debug!("Engine autoplayed, marking store as playing");
            store.set_playing_state(true);
        }
        Ok(())
    }
}

/// Translate an engine notification into store commands
///
/// - `Started` / `Paused` reconcile `is_playing`
/// - `Ended` advances when there is a next episode and clears the player
///   otherwise
pub fn apply_engine_event(store: &mut PlayerStateStore, event: EngineEvent) {
    match event {
        EngineEvent::Started => store.set_playing_state(true),
        EngineEvent::Paused => store.set_playing_state(false),
        EngineEvent::Ended => {
            if store.has_next() {
                store.play_next();
            } else {
                debug!("Playlist finished");
                store.clear_player_state();
            }
        }
        EngineEvent::MetadataLoaded | EngineEvent::PositionChanged { .. } => {}
    }
}
