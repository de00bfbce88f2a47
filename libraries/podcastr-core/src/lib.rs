//! Podcastr Core
//!
//! Platform-agnostic episode types and formatting helpers shared by the
//! player and the episode API client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode` (what the player needs) and `EpisodeDetails`
//!   (what an episode page shows)
//! - **Formatting**: `HH:MM:SS` durations and Brazilian Portuguese dates
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode, EpisodeId};
//!
//! let episode = Episode {
//!     id: EpisodeId::new("a-importancia-da-contribuicao-em-open-source"),
//!     title: "Faladev #30".to_string(),
//!     members: "Diego e Richard".to_string(),
//!     thumbnail: "https://example.com/opensource.jpg".to_string(),
//!     url: "https://example.com/opensource.m4a".to_string(),
//!     duration: 3981,
//! };
//!
//! assert_eq!(format_duration(episode.duration), "01:06:21");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{CoreError, Result};
pub use format::{
    format_duration, format_header_date, format_published_at, parse_duration_secs,
    parse_published_at,
};
pub use types::{Episode, EpisodeDetails, EpisodeId};
