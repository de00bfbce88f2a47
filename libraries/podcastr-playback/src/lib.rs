//! Podcastr - Player State
//!
//! Platform-agnostic player state for Podcastr.
//!
//! This crate provides:
//! - `PlayerStateStore`: playlist, active index and play/loop/shuffle flags,
//!   mutated only through commands
//! - Derived `has_next` / `has_previous` / `current_episode`, never stored
//! - Snapshot subscriptions and a polled event queue
//! - Uniform random "next" in shuffle mode
//! - `PlayerBridge`: two-way sync with a host playback engine
//! - `TransportControls`: button enablement for a player view
//!
//! # Architecture
//!
//! `podcastr-playback` does no I/O and no audio work. The store is created
//! once and handed to the views that need it; there is no global instance.
//! Everything runs on the UI thread, so the store is shared with
//! `Rc<RefCell<_>>` rather than locks.
//!
//! # Example: Browse and Play
//!
//! ```rust
//! use podcastr_core::{Episode, EpisodeId};
//! use podcastr_playback::{PlayerConfig, PlayerStateStore};
//!
//! fn episode(id: &str) -> Episode {
//!     Episode {
//!         id: EpisodeId::new(id),
//!         title: id.to_string(),
//!         members: "Diego e Richard".to_string(),
//!         thumbnail: format!("https://example.com/{}.jpg", id),
//!         url: format!("https://example.com/{}.m4a", id),
//!         duration: 1800,
//!     }
//! }
//!
//! let mut store = PlayerStateStore::new(PlayerConfig::default());
//! store.play_list(vec![episode("a"), episode("b"), episode("c")], 1)?;
//!
//! assert!(store.has_previous());
//! assert!(store.has_next());
//!
//! store.play_next();
//! assert_eq!(store.current_index(), 2);
//! assert!(!store.has_next());
//! # Ok::<(), podcastr_playback::PlayerError>(())
//! ```
//!
//! # Example: Engine Sync
//!
//! ```rust
//! use podcastr_playback::{EngineEvent, PlaybackEngine, PlayerBridge, PlayerStateStore, Result};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! // Implement PlaybackEngine for your platform
//! struct AudioElement;
//!
//! impl PlaybackEngine for AudioElement {
//!     fn load(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn start(&mut self) -> Result<()> { Ok(()) }
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_looping(&mut self, _looping: bool) {}
//!     fn unload(&mut self) {}
//! }
//!
//! let mut store = PlayerStateStore::default();
//! let bridge = Rc::new(RefCell::new(PlayerBridge::new(AudioElement)));
//! PlayerBridge::attach(&bridge, &mut store);
//!
//! # use podcastr_core::{Episode, EpisodeId};
//! # let episode = Episode {
//! #     id: EpisodeId::new("ep-1"),
//! #     title: "Faladev #30".to_string(),
//! #     members: "Diego e Richard".to_string(),
//! #     thumbnail: "https://example.com/ep-1.jpg".to_string(),
//! #     url: "https://example.com/ep-1.m4a".to_string(),
//! #     duration: 3981,
//! # };
//! store.play(episode);
//! assert!(bridge.borrow().is_engine_running());
//!
//! // Media keys paused the element: feed that back into the store
//! PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Paused)?;
//! assert!(!store.is_playing());
//! # Ok::<(), podcastr_playback::PlayerError>(())
//! ```

mod bridge;
mod controls;
mod engine;
mod error;
mod events;
mod shuffle;
mod state;
mod store;
pub mod types;
pub mod wasm;

// Public exports
pub use bridge::{apply_engine_event, PlayerBridge};
pub use controls::TransportControls;
pub use engine::{EngineEvent, PlaybackEngine};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use shuffle::{IndexPicker, RandomIndex, SeededIndex};
pub use state::{PlayerSnapshot, PlayerState};
pub use store::{PlayerStateStore, SharedPlayerStore, SubscriptionId};
pub use types::{IndexPolicy, PlayerConfig};
