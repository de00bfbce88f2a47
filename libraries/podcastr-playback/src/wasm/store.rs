//! WASM-compatible PlayerStateStore wrapper

use super::types::WasmEpisode;
use crate::{PlayerConfig, PlayerError, PlayerStateStore, TransportControls};
use js_sys::Function;
use podcastr_core::Episode;
use wasm_bindgen::prelude::*;

/// WASM-compatible player state store
///
/// Wraps `PlayerStateStore` with a JavaScript-friendly API. Snapshots are
/// delivered to the `onChange` callback as plain objects.
#[wasm_bindgen]
pub struct WasmPlayerStore {
    inner: PlayerStateStore,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayerStore {
    /// Create a new store
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self {
            inner: PlayerStateStore::new(PlayerConfig::default()),
            on_error: None,
        }
    }

    // ===== Commands =====

    pub fn play(&mut self, episode: WasmEpisode) {
        self.inner.play(episode.into());
    }

    /// Play a list of episodes (plain objects) starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let list: Vec<Episode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| self.report(format!("Invalid playlist: {}", e)))?;
        self.inner
            .play_list(list, index)
            .map_err(|e| self.handle_error(e))
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.inner.toggle_play();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.inner.toggle_loop();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
    }

    /// Reconcile with the audio element's own play/pause events
    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, playing: bool) {
        self.inner.set_playing_state(playing);
    }

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.inner.play_next();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.inner.play_previous();
    }

    #[wasm_bindgen(js_name = clearPlayerState)]
    pub fn clear_player_state(&mut self) {
        self.inner.clear_player_state();
    }

    // ===== State Queries =====

    /// Current snapshot as a plain object
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).map_err(JsValue::from)
    }

    /// Transport button state as a plain object
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        let controls = TransportControls::from_snapshot(&self.inner.snapshot());
        serde_wasm_bindgen::to_value(&controls).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> Option<WasmEpisode> {
        self.inner.current_episode().map(WasmEpisode::from)
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    // ===== Event Callbacks =====

    /// Register a callback receiving the snapshot after every change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.inner.subscribe(move |snapshot| {
            if let Ok(value) = serde_wasm_bindgen::to_value(snapshot) {
                callback.call1(&JsValue::NULL, &value).ok();
            }
        });
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    fn handle_error(&self, error: PlayerError) -> JsValue {
        self.report(error.to_string())
    }

    fn report(&self, err_msg: String) -> JsValue {
        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

impl Default for WasmPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
