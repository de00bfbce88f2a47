//! Podcastr API Client
//!
//! HTTP client for the Podcastr episode API (a json-server style mock).
//!
//! # Features
//!
//! - **Episode listing**: `GET /episodes` with `_limit`, `_sort`, `_order`
//! - **Episode detail**: `GET /episodes/{id}`
//! - **Record mapping**: API records into `Episode` / `EpisodeDetails`
//! - **Pages**: home page split into latest releases and the rest, episode
//!   pages, and the ids worth pre-rendering
//! - **Configuration**: defaults, `podcastr.toml` and `PODCASTR_*` variables
//!
//! # Example
//!
//! ```ignore
//! use podcastr_client::{ClientConfig, EpisodeApiClient, HomePage};
//! use podcastr_playback::PlayerStateStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load()?;
//!     let client = EpisodeApiClient::new(config.clone())?;
//!
//!     let home = HomePage::load(&client, &config).await?;
//!
//!     // Clicking the second row of the table plays the whole page from there
//!     let mut player = PlayerStateStore::default();
//!     if let Some(index) = home.play_from_all(1) {
//!         player.play_list(home.playlist(), index)?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod pages;
mod source;
mod types;

// Re-export main types
pub use crate::client::EpisodeApiClient;
pub use crate::config::{ClientConfig, CONFIG_FILE};
pub use crate::error::{ClientError, Result};
pub use crate::pages::{header_label, today_label, EpisodePage, HomePage};
pub use crate::source::EpisodeSource;
pub use crate::types::{ApiEpisode, ApiFile, EpisodeQuery, SortOrder};
