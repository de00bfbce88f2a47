//! Home and episode page assembly
//!
//! Pages hold display-ready `EpisodeDetails` and hand the player plain
//! `Episode` playlists plus the index to start from.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::source::EpisodeSource;
use crate::types::EpisodeQuery;
use chrono::{Local, NaiveDate};
use podcastr_core::{format_header_date, Episode, EpisodeDetails, EpisodeId};
use tracing::debug;

/// Header date label for today (`sex, 8 janeiro`)
pub fn today_label() -> String {
    format_header_date(Local::now().date_naive())
}

/// Header date label for a given day
pub fn header_label(date: NaiveDate) -> String {
    format_header_date(date)
}

/// Episodes shown on the home page, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePage {
    /// Highlighted latest releases
    pub latest: Vec<EpisodeDetails>,
    /// Everything else, in the table below
    pub all: Vec<EpisodeDetails>,
}

impl HomePage {
    /// Fetch `home_limit` newest episodes and split off `latest_count`
    pub async fn load<S>(source: &S, config: &ClientConfig) -> Result<Self>
    where
        S: EpisodeSource + ?Sized,
    {
        let records = source
            .fetch_episodes(&EpisodeQuery::latest(config.home_limit))
            .await?;

        let episodes = records
            .into_iter()
            .map(EpisodeDetails::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_episodes(episodes, config.latest_count))
    }

    /// Split an already sorted list
    pub fn from_episodes(mut episodes: Vec<EpisodeDetails>, latest_count: usize) -> Self {
        let all = episodes.split_off(latest_count.min(episodes.len()));
        debug!(latest = episodes.len(), all = all.len(), "Assembled home page");
        Self {
            latest: episodes,
            all,
        }
    }

    pub fn len(&self) -> usize {
        self.latest.len() + self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty() && self.all.is_empty()
    }

    /// Every episode on the page as one playlist: latest, then the rest
    pub fn playlist(&self) -> Vec<Episode> {
        self.latest
            .iter()
            .chain(self.all.iter())
            .map(EpisodeDetails::to_episode)
            .collect()
    }

    /// Playlist index of the `index`-th latest release
    pub fn play_latest(&self, index: usize) -> Option<usize> {
        (index < self.latest.len()).then_some(index)
    }

    /// Playlist index of the `index`-th row of the remaining episodes
    pub fn play_from_all(&self, index: usize) -> Option<usize> {
        (index < self.all.len()).then_some(self.latest.len() + index)
    }
}

/// A single episode's page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodePage {
    pub episode: EpisodeDetails,
}

impl EpisodePage {
    pub async fn load<S>(source: &S, id: &EpisodeId) -> Result<Self>
    where
        S: EpisodeSource + ?Sized,
    {
        let record = source.fetch_episode(id).await?;
        Ok(Self {
            episode: EpisodeDetails::try_from(record)?,
        })
    }

    /// The episode as a player entry
    pub fn playable(&self) -> Episode {
        self.episode.to_episode()
    }

    /// Ids of the newest episodes, pre-rendered ahead of time
    pub async fn static_paths<S>(source: &S, config: &ClientConfig) -> Result<Vec<EpisodeId>>
    where
        S: EpisodeSource + ?Sized,
    {
        let limit = u32::try_from(config.latest_count).unwrap_or(u32::MAX);
        let records = source.fetch_episodes(&EpisodeQuery::latest(limit)).await?;

        records
            .into_iter()
            .map(|record| EpisodeId::parse(record.id).map_err(ClientError::from))
            .collect()
    }
}
