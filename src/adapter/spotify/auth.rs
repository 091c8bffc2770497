//! Client-credentials token cache for the Spotify Web API.

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use reqwest::Client;
use tracing::{error, info};

use super::models::TokenResponse;
use crate::error::TrackProviderError;

/// Tokens are refreshed once they are this close to expiring.
pub const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SpotifyCredentials {
    fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    /// Already shortened by `EXPIRY_MARGIN`
    refresh_at: Instant,
}

/// Process-wide access token cache.
///
/// The lock only guards reads and writes of the cached value and is never
/// held across the token request. Two requests that find the token stale at
/// the same time both re-authenticate and the last writer wins; the extra
/// token request is harmless.
pub struct TokenCache {
    http_client: Client,
    token_url: String,
    credentials: SpotifyCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    #[must_use]
    pub fn new(http_client: Client, accounts_url: &str, credentials: SpotifyCredentials) -> Self {
        Self {
            http_client,
            token_url: format!("{}/api/token", accounts_url.trim_end_matches('/')),
            credentials,
            cached: Mutex::new(None),
        }
    }

    /// Returns the cached token, re-authenticating when it is missing or stale.
    pub async fn access_token(&self) -> Result<String, TrackProviderError> {
        if let Some(token) = self.fresh_cached_token() {
            return Ok(token);
        }
        self.authenticate().await
    }

    fn fresh_cached_token(&self) -> Option<String> {
        let now = Instant::now();
        self.cached
            .lock()
            .as_ref()
            .filter(|token| now < token.refresh_at)
            .map(|token| token.access_token.clone())
    }

    /// Exchanges the client credentials for a new bearer token and caches it.
    pub async fn authenticate(&self) -> Result<String, TrackProviderError> {
        if !self.credentials.is_configured() {
            return Err(TrackProviderError::Auth(
                "client credentials are not configured".to_string(),
            ));
        }

        info!("Requesting new Spotify access token");

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error getting Spotify token");
                TrackProviderError::Auth(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Spotify token error response");
            return Err(TrackProviderError::Auth(format!("token endpoint returned {status}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| TrackProviderError::Auth(format!("malformed token response: {e}")))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        let access_token = token.access_token;
        *self.cached.lock() = Some(CachedToken {
            access_token: access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });

        info!(expires_in = token.expires_in, "Successfully obtained Spotify access token");
        Ok(access_token)
    }
}
