use crate::adapter::spotify::{SpotifyClient, SpotifyConfig, SpotifyCredentials};
use crate::adapter::weatherapi::{WeatherApiClient, WeatherApiConfig};
use crate::config::Settings;
use crate::error::AppError;
use crate::handler::WeatherState;
use crate::port::{TrackProvider, WeatherProvider};
use crate::recommendation::Resolver;
use std::sync::Arc;
use tracing::info;

/// Shared application state holding the provider clients.
pub struct AppState {
    pub weather: Arc<dyn WeatherProvider>,
    pub tracks: Arc<dyn TrackProvider>,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let mock_mode = settings.weather_mock_mode();
        if mock_mode {
            info!("Weather lookups answered from canned data");
        }

        let weather = WeatherApiClient::new(WeatherApiConfig {
            base_url: settings.weather_api_base_url.clone(),
            api_key: settings.weather_api_key.clone(),
            mock_mode,
            timeout: settings.provider_timeout,
        })
        .map_err(|e| AppError::Client(e.to_string()))?;

        let tracks = SpotifyClient::new(SpotifyConfig {
            api_base_url: settings.spotify_api_base_url.clone(),
            accounts_url: settings.spotify_accounts_url.clone(),
            market: settings.spotify_market.clone(),
            credentials: SpotifyCredentials {
                client_id: settings.spotify_client_id.clone(),
                client_secret: settings.spotify_client_secret.clone(),
            },
            timeout: settings.provider_timeout,
        })
        .map_err(|e| AppError::Client(e.to_string()))?;

        Ok(Self {
            weather: Arc::new(weather),
            tracks: Arc::new(tracks),
        })
    }

    #[must_use]
    pub fn weather_state(&self) -> WeatherState {
        WeatherState {
            weather: Arc::clone(&self.weather),
            resolver: Resolver::new(Arc::clone(&self.tracks)),
        }
    }
}
