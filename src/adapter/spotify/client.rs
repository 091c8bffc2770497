use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use super::auth::{SpotifyCredentials, TokenCache};
use super::models::{
    FeaturedPlaylistsResponse, Paging, PlaylistItem, RecommendationsResponse, SearchResponse,
};
use crate::domain::ProviderTrack;
use crate::error::TrackProviderError;
use crate::port::TrackProvider;
use crate::port::track_provider::TrackFuture;

const TRACK_LIMIT: &str = "5";
const MIN_POPULARITY: &str = "50";

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub api_base_url: String,
    pub accounts_url: String,
    pub market: String,
    pub credentials: SpotifyCredentials,
    pub timeout: Duration,
}

/// Spotify Web API client implementing [`TrackProvider`].
pub struct SpotifyClient {
    http_client: Client,
    api_base_url: String,
    market: String,
    tokens: TokenCache,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self, TrackProviderError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TrackProviderError::Network(e.to_string()))?;

        let tokens = TokenCache::new(
            http_client.clone(),
            &config.accounts_url,
            config.credentials,
        );

        Ok(Self {
            http_client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            market: config.market,
            tokens,
        })
    }

    /// Authenticated GET against the Web API, decoding the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TrackProviderError> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/{}", self.api_base_url, endpoint);

        debug!(url = %url, "Querying Spotify API");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| TrackProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(endpoint, status = status.as_u16(), body = %body, "Spotify error response");
            return Err(TrackProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TrackProviderError::Parse(e.to_string()))
    }

    pub async fn search_tracks(&self, genre: &str) -> Result<Vec<ProviderTrack>, TrackProviderError> {
        info!(genre, "Searching for top tracks with genre");

        let query = format!("genre:{genre}");
        let response: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("q", query.as_str()),
                    ("type", "track"),
                    ("market", self.market.as_str()),
                    ("limit", TRACK_LIMIT),
                ],
            )
            .await?;

        let tracks = into_tracks(response.tracks.map(|page| page.items).unwrap_or_default());
        if tracks.is_empty() {
            return Err(TrackProviderError::Empty("search results"));
        }
        info!(genre, count = tracks.len(), "Found tracks for genre");
        Ok(tracks)
    }

    pub async fn recommendations(
        &self,
        genre: &str,
    ) -> Result<Vec<ProviderTrack>, TrackProviderError> {
        info!(genre, "Getting recommendations for seed genre");

        let response: RecommendationsResponse = self
            .get_json(
                "recommendations",
                &[
                    ("seed_genres", genre),
                    ("market", self.market.as_str()),
                    ("limit", TRACK_LIMIT),
                    ("min_popularity", MIN_POPULARITY),
                ],
            )
            .await?;

        let tracks = into_tracks(response.tracks);
        if tracks.is_empty() {
            return Err(TrackProviderError::Empty("recommendations"));
        }
        info!(genre, count = tracks.len(), "Found recommendations for genre");
        Ok(tracks)
    }

    pub async fn featured_tracks(&self) -> Result<Vec<ProviderTrack>, TrackProviderError> {
        info!("Getting tracks from featured playlists");

        let featured: FeaturedPlaylistsResponse = self
            .get_json(
                "browse/featured-playlists",
                &[("limit", "1"), ("country", self.market.as_str())],
            )
            .await?;

        let playlist = featured
            .playlists
            .and_then(|page| page.items.into_iter().next())
            .ok_or(TrackProviderError::Empty("featured playlists"))?;

        info!(playlist_id = %playlist.id, playlist_name = %playlist.name, "Using featured playlist");

        let items: Paging<PlaylistItem> = self
            .get_json(
                &format!("playlists/{}/tracks", playlist.id),
                &[("limit", TRACK_LIMIT), ("market", self.market.as_str())],
            )
            .await?;

        let tracks = into_tracks(items.items.into_iter().filter_map(|item| item.track));
        if tracks.is_empty() {
            return Err(TrackProviderError::Empty("tracks in the featured playlist"));
        }
        Ok(tracks)
    }
}

fn into_tracks<I, T>(raw: I) -> Vec<ProviderTrack>
where
    I: IntoIterator<Item = T>,
    T: Into<ProviderTrack>,
{
    raw.into_iter().map(Into::into).collect()
}

impl TrackProvider for SpotifyClient {
    fn search_by_genre<'a>(&'a self, genre: &'a str) -> TrackFuture<'a> {
        Box::pin(self.search_tracks(genre))
    }

    fn recommendations_for_seed<'a>(&'a self, genre: &'a str) -> TrackFuture<'a> {
        Box::pin(self.recommendations(genre))
    }

    fn featured_playlist_tracks(&self) -> TrackFuture<'_> {
        Box::pin(self.featured_tracks())
    }
}
