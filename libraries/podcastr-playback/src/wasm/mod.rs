//! WASM bindings for podcastr-playback
//!
//! Exposes the player state store to JavaScript so a browser front end can
//! drive an HTML audio element from it.

#[cfg(feature = "wasm")]
pub mod types;

#[cfg(feature = "wasm")]
pub mod store;

#[cfg(feature = "wasm")]
pub use store::WasmPlayerStore;

#[cfg(feature = "wasm")]
pub use types::WasmEpisode;
