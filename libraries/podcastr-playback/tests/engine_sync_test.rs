//! Engine sync tests
//!
//! Drives a mock playback engine through an attached bridge and verifies the
//! store and the engine never drift apart, in both directions.

use podcastr_core::{Episode, EpisodeId};
use podcastr_playback::{
    EngineEvent, PlaybackEngine, PlayerBridge, PlayerConfig, PlayerError, PlayerStateStore,
    Result, TransportControls,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// ===== Test Helpers =====

/// Mock audio element for testing
#[derive(Debug, Default)]
struct MockEngine {
    loaded: Option<String>,
    playing: bool,
    looping: bool,
    position: Duration,
    loads: usize,
    fail_start: bool,
}

impl PlaybackEngine for MockEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.loaded = Some(url.to_string());
        self.playing = false;
        self.position = Duration::ZERO;
        self.loads += 1;
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        if self.fail_start {
            return Err(PlayerError::engine("autoplay blocked"));
        }
        if self.loaded.is_none() {
            return Err(PlayerError::engine("nothing loaded"));
        }
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn unload(&mut self) {
        self.loaded = None;
        self.playing = false;
    }
}

fn episode(id: &str) -> Episode {
    Episode {
        id: EpisodeId::new(id),
        title: format!("Episode {}", id),
        members: "Diego e Richard".to_string(),
        thumbnail: format!("https://example.com/{}.jpg", id),
        url: format!("https://example.com/{}.m4a", id),
        duration: 300,
    }
}

fn episodes(count: usize) -> Vec<Episode> {
    (0..count).map(|i| episode(&format!("e{}", i))).collect()
}

fn setup(config: PlayerConfig) -> (PlayerStateStore, Rc<RefCell<PlayerBridge<MockEngine>>>) {
    let mut store = PlayerStateStore::new(config);
    let bridge = Rc::new(RefCell::new(PlayerBridge::new(MockEngine::default())));
    PlayerBridge::attach(&bridge, &mut store);
    (store, bridge)
}

fn engine_url(bridge: &Rc<RefCell<PlayerBridge<MockEngine>>>) -> Option<String> {
    bridge.borrow().engine().loaded.clone()
}

fn engine_playing(bridge: &Rc<RefCell<PlayerBridge<MockEngine>>>) -> bool {
    bridge.borrow().engine().playing
}

// ===== Store → Engine =====

#[test]
fn play_loads_and_starts_engine() {
    let (mut store, bridge) = setup(PlayerConfig::default());

    store.play(episode("a"));

    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/a.m4a"));
    assert!(engine_playing(&bridge));
}

#[test]
fn toggle_play_stops_and_resumes_engine() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play(episode("a"));

    store.toggle_play();
    assert!(!engine_playing(&bridge));

    store.toggle_play();
    assert!(engine_playing(&bridge));
    assert_eq!(bridge.borrow().engine().loads, 1);
}

#[test]
fn navigation_reloads_engine() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(3), 0).unwrap();

    store.play_next();
    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/e1.m4a"));

    store.play_previous();
    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/e0.m4a"));
    assert!(engine_playing(&bridge));
}

#[test]
fn paused_navigation_autoplays_next_episode() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(3), 0).unwrap();
    store.toggle_play();
    assert!(!engine_playing(&bridge));

    store.play_next();

    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/e1.m4a"));
    assert!(engine_playing(&bridge));

    // The element reports that it started; the store follows
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Started).unwrap();
    assert!(store.is_playing());
    assert!(engine_playing(&bridge));
    assert_eq!(bridge.borrow().engine().loads, 2);
}

#[test]
fn loop_flag_reaches_engine() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play(episode("a"));

    store.toggle_loop();
    assert!(bridge.borrow().engine().looping);

    store.toggle_loop();
    assert!(!bridge.borrow().engine().looping);
}

#[test]
fn clear_unloads_engine() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play(episode("a"));

    store.clear_player_state();

    assert_eq!(engine_url(&bridge), None);
    assert_eq!(bridge.borrow().progress(), 0);
    assert_eq!(bridge.borrow().duration(), 0);
}

#[test]
fn attach_syncs_existing_state() {
    let mut store = PlayerStateStore::default();
    store.play(episode("a"));

    let bridge = Rc::new(RefCell::new(PlayerBridge::new(MockEngine::default())));
    PlayerBridge::attach(&bridge, &mut store);

    assert!(engine_playing(&bridge));
}

#[test]
fn sync_errors_are_kept_for_the_view() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    bridge.borrow_mut().engine_mut().fail_start = true;

    store.play(episode("a"));

    assert_eq!(
        bridge.borrow_mut().take_error(),
        Some(PlayerError::engine("autoplay blocked"))
    );
    assert!(bridge.borrow_mut().take_error().is_none());
}

#[test]
fn dropped_bridge_subscription_is_inert() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    drop(bridge);

    store.play(episode("a"));
    assert!(store.is_playing());
}

// ===== Engine → Store =====

#[test]
fn spontaneous_pause_updates_store() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play(episode("a"));

    // Media keys paused the element behind the player's back
    bridge.borrow_mut().engine_mut().playing = false;
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Paused).unwrap();

    assert!(!store.is_playing());
    assert!(!bridge.borrow().is_engine_running());

    bridge.borrow_mut().engine_mut().playing = true;
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Started).unwrap();

    assert!(store.is_playing());
    assert!(engine_playing(&bridge));
}

#[test]
fn ended_advances_to_next_episode() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 0).unwrap();

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert_eq!(store.current_index(), 1);
    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/e1.m4a"));
    assert!(engine_playing(&bridge));
}

#[test]
fn natural_end_pause_then_ended_plays_next_episode() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 0).unwrap();

    // An audio element reaching the end fires `pause` before `ended`
    bridge.borrow_mut().engine_mut().playing = false;
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Paused).unwrap();
    assert!(!store.is_playing());

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert_eq!(store.current_index(), 1);
    assert!(store.is_playing());
    assert_eq!(engine_url(&bridge).as_deref(), Some("https://example.com/e1.m4a"));
    assert!(engine_playing(&bridge));
    assert!(bridge.borrow().is_engine_running());
}

#[test]
fn natural_end_of_last_episode_stays_stopped() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 1).unwrap();

    bridge.borrow_mut().engine_mut().playing = false;
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Paused).unwrap();
    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert!(store.current_episode().is_none());
    assert!(!store.is_playing());
    assert_eq!(engine_url(&bridge), None);
}

#[test]
fn ended_on_last_episode_clears_player() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 1).unwrap();

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert!(store.current_episode().is_none());
    assert_eq!(engine_url(&bridge), None);
    // Default clear keeps the flag; the view shows an empty player anyway
    assert!(store.is_playing());
    assert!(!TransportControls::from_snapshot(&store.snapshot()).play_enabled);
}

#[test]
fn ended_on_last_episode_with_stop_on_clear() {
    let (mut store, bridge) = setup(PlayerConfig {
        stop_on_clear: true,
        ..Default::default()
    });
    store.play(episode("a"));

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert!(!store.is_playing());
    assert!(!engine_playing(&bridge));
}

#[test]
fn shuffle_ended_on_same_index_restarts_episode() {
    let mut store = PlayerStateStore::with_picker(PlayerConfig::default(), |_len: usize| 0);
    let bridge = Rc::new(RefCell::new(PlayerBridge::new(MockEngine::default())));
    PlayerBridge::attach(&bridge, &mut store);
    store.play_list(episodes(3), 0).unwrap();
    store.toggle_shuffle();
    bridge.borrow_mut().engine_mut().position = Duration::from_secs(300);

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert_eq!(store.current_index(), 0);
    assert_eq!(bridge.borrow().engine().loads, 2);
    assert_eq!(bridge.borrow().engine().position, Duration::ZERO);
    assert!(engine_playing(&bridge));
}

#[test]
fn ended_while_looping_keeps_store_untouched() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 0).unwrap();
    store.toggle_loop();
    store.drain_events();

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::Ended).unwrap();

    assert_eq!(store.current_index(), 0);
    assert!(!store.has_pending_events());
    assert!(engine_playing(&bridge));
}

// ===== Scrubbing =====

#[test]
fn seek_and_position_updates() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play(episode("a"));

    bridge.borrow_mut().seek(120).unwrap();
    assert_eq!(bridge.borrow().engine().position, Duration::from_secs(120));
    assert_eq!(bridge.borrow().progress(), 120);

    PlayerBridge::dispatch(
        &bridge,
        &mut store,
        EngineEvent::PositionChanged {
            position: Duration::from_millis(125_700),
        },
    )
    .unwrap();
    assert_eq!(bridge.borrow().progress(), 125);

    PlayerBridge::dispatch(&bridge, &mut store, EngineEvent::MetadataLoaded).unwrap();
    assert_eq!(bridge.borrow().progress(), 0);
}

#[test]
fn new_episode_resets_progress() {
    let (mut store, bridge) = setup(PlayerConfig::default());
    store.play_list(episodes(2), 0).unwrap();
    bridge.borrow_mut().seek(200).unwrap();

    store.play_next();

    assert_eq!(bridge.borrow().progress(), 0);
    assert_eq!(bridge.borrow().duration(), 300);
}
