//! HTTP client for the episode API.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::source::EpisodeSource;
use crate::types::{ApiEpisode, EpisodeQuery};
use async_trait::async_trait;
use podcastr_core::EpisodeId;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info};
use url::Url;

/// Client for the json-server style episode API.
///
/// # Example
///
/// ```ignore
/// use podcastr_client::{ClientConfig, EpisodeApiClient, EpisodeQuery};
///
/// let client = EpisodeApiClient::new(ClientConfig::default())?;
/// let episodes = client.list_episodes(&EpisodeQuery::latest(12)).await?;
/// println!("Found {} episodes", episodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeApiClient {
    http: Client,
    base_url: Url,
    config: ClientConfig,
}

impl EpisodeApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        // Keep a trailing slash so relative joins stay under the base path
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /episodes` with json-server query parameters.
    pub async fn list_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>> {
        let url = self.base_url.join("episodes")?;
        debug!(url = %url, params = ?query.to_params(), "Fetching episodes");

        let response = self
            .http
            .get(url)
            .query(&query.to_params())
            .send()
            .await?;

        let response = check_status(response, None).await?;
        let episodes: Vec<ApiEpisode> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse episode list: {}", e))
        })?;

        info!(count = episodes.len(), "Fetched episodes");
        Ok(episodes)
    }

    /// `GET /episodes/{id}`.
    pub async fn get_episode(&self, id: &EpisodeId) -> Result<ApiEpisode> {
        let mut url = self.base_url.join("episodes")?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .push(id.as_str());
        debug!(url = %url, episode_id = %id, "Fetching episode");

        let response = self.http.get(url).send().await?;
        let response = check_status(response, Some(id)).await?;

        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse episode {}: {}", id, e))
        })
    }
}

/// Pass successful responses through; map the rest to errors
async fn check_status(response: Response, id: Option<&EpisodeId>) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ClientError::NotFound(id.to_string()));
        }
    }

    let error_text = response.text().await.unwrap_or_default();
    Err(ClientError::ServerError {
        status: status.as_u16(),
        message: error_text,
    })
}

#[async_trait]
impl EpisodeSource for EpisodeApiClient {
    async fn fetch_episodes(&self, query: &EpisodeQuery) -> Result<Vec<ApiEpisode>> {
        self.list_episodes(query).await
    }

    async fn fetch_episode(&self, id: &EpisodeId) -> Result<ApiEpisode> {
        self.get_episode(id).await
    }
}
