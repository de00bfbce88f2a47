//! API record types and query parameters.

use crate::error::{ClientError, Result};
use podcastr_core::{parse_duration_secs, parse_published_at, Episode, EpisodeDetails, EpisodeId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Episode record as served by the API.
///
/// The media locator and length normally live in a nested `file` object;
/// flat `url` / `duration` fields are accepted as a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ApiFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
}

/// Media file attached to an episode record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFile {
    pub url: String,
    /// Length in seconds, as a number or a numeric string
    pub duration: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl ApiEpisode {
    /// Media locator and raw duration, preferring the nested `file` object
    fn media(&self) -> Result<(&str, &Value)> {
        if let Some(file) = &self.file {
            return Ok((&file.url, &file.duration));
        }

        match (&self.url, &self.duration) {
            (Some(url), Some(duration)) => Ok((url, duration)),
            _ => Err(ClientError::ParseError(format!(
                "Episode {} has no media file",
                self.id
            ))),
        }
    }
}

impl TryFrom<ApiEpisode> for EpisodeDetails {
    type Error = ClientError;

    fn try_from(record: ApiEpisode) -> Result<Self> {
        let (url, duration) = record.media()?;
        let url = url.to_string();
        let duration = parse_duration_secs(duration)?;
        let published_at = parse_published_at(&record.published_at)?;

        Ok(Self {
            id: EpisodeId::parse(record.id)?,
            title: record.title,
            members: record.members,
            thumbnail: record.thumbnail,
            url,
            duration,
            published_at,
            description: record.description,
        })
    }
}

impl TryFrom<ApiEpisode> for Episode {
    type Error = ClientError;

    fn try_from(record: ApiEpisode) -> Result<Self> {
        let (url, duration) = record.media()?;
        let url = url.to_string();
        let duration = parse_duration_secs(duration)?;

        Ok(Self {
            id: EpisodeId::parse(record.id)?,
            title: record.title,
            members: record.members,
            thumbnail: record.thumbnail,
            url,
            duration,
        })
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters for `GET /episodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeQuery {
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl EpisodeQuery {
    /// Newest episodes first, at most `limit` of them
    pub fn latest(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            sort: Some("published_at".to_string()),
            order: Some(SortOrder::Desc),
        }
    }

    /// Query string pairs in json-server syntax
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("_limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("_sort", sort.clone()));
        }
        if let Some(order) = self.order {
            params.push(("_order", order.as_str().to_string()));
        }
        params
    }
}
