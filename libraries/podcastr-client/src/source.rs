//! Episode source abstraction

use crate::error::Result;
use crate::types::{ApiEpisode, EpisodeQuery};
use async_trait::async_trait;
use podcastr_core::EpisodeId;

/// Anything that can serve episode records
///
/// Implemented by `EpisodeApiClient`; pages only depend on this trait, so they
/// can be assembled from fixtures as well.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// List episodes matching a query
    async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>>;

    /// Fetch a single episode record
    async fn fetch_episode(&self, id: &EpisodeId) -> Result<ApiEpisode>;
}
