//! WASM-compatible type definitions

use podcastr_core::{Episode, EpisodeId};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// WASM-compatible episode
///
/// Mirrors `Episode` with plain JS-friendly fields.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[wasm_bindgen]
pub struct WasmEpisode {
    id: String,
    title: String,
    members: String,
    thumbnail: String,
    url: String,
    duration: f64,
}

#[wasm_bindgen]
impl WasmEpisode {
    /// Create a new episode (duration in seconds)
    #[wasm_bindgen(constructor)]
    pub fn new(
        id: String,
        title: String,
        members: String,
        thumbnail: String,
        url: String,
        duration: f64,
    ) -> Self {
        Self {
            id,
            title,
            members,
            thumbnail,
            url,
            duration,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn members(&self) -> String {
        self.members.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn thumbnail(&self) -> String {
        self.thumbnail.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl From<&Episode> for WasmEpisode {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id.to_string(),
            title: episode.title.clone(),
            members: episode.members.clone(),
            thumbnail: episode.thumbnail.clone(),
            url: episode.url.clone(),
            duration: episode.duration as f64,
        }
    }
}

impl From<WasmEpisode> for Episode {
    fn from(episode: WasmEpisode) -> Self {
        let duration = if episode.duration.is_finite() && episode.duration > 0.0 {
            episode.duration.trunc() as u64
        } else {
            0
        };

        Self {
            id: EpisodeId::new(episode.id),
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
            url: episode.url,
            duration,
        }
    }
}
