use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, warn};

use super::mock_data::{mock_for_city, mock_for_coordinates};
use crate::domain::WeatherReport;
use crate::error::WeatherError;
use crate::port::WeatherProvider;
use crate::port::weather_provider::WeatherFuture;

/// Provider error codes for an invalid, disabled or exhausted API key.
const KEY_ERROR_CODES: [u32; 3] = [2006, 2007, 2008];
/// "No location found matching parameter 'q'"
const LOCATION_NOT_FOUND_CODE: u32 = 1006;

#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Answer every lookup from canned data without touching the network
    pub mock_mode: bool,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: u32,
    #[serde(default)]
    message: String,
}

/// Which canned report to answer with when the key is unusable.
enum Query<'a> {
    City(&'a str),
    Coordinates,
}

impl Query<'_> {
    fn mock(&self) -> WeatherReport {
        match self {
            Query::City(city) => mock_for_city(city),
            Query::Coordinates => mock_for_coordinates(),
        }
    }
}

/// weatherapi.com client implementing [`WeatherProvider`].
pub struct WeatherApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    mock_mode: bool,
}

impl WeatherApiClient {
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WeatherError::Unavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.unwrap_or_default(),
            mock_mode: config.mock_mode,
        })
    }

    pub async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if self.mock_mode {
            info!(city, "Using mock data for city");
            return Ok(mock_for_city(city));
        }

        info!(city, "Getting current weather for city");
        self.fetch_current(city, Query::City(city)).await
    }

    pub async fn current_weather_at(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        if self.mock_mode {
            info!(lat, lon, "Using mock data for coordinates");
            return Ok(mock_for_coordinates());
        }

        info!(lat, lon, "Getting current weather for coordinates");
        self.fetch_current(&format!("{lat},{lon}"), Query::Coordinates)
            .await
    }

    async fn fetch_current(&self, q: &str, query: Query<'_>) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/current.json", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", q)])
            .send()
            .await
            .map_err(|e| {
                error!(q, error = %e, "Error fetching weather data");
                WeatherError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| WeatherError::Api {
                status: status.as_u16(),
                message: format!("malformed weather response: {e}"),
            });
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorEnvelope>(&body)
            .ok()
            .map(|envelope| envelope.error);

        match detail {
            Some(detail) if KEY_ERROR_CODES.contains(&detail.code) => {
                warn!(q, code = detail.code, "Weather API key issue, using mock data");
                Ok(query.mock())
            }
            Some(detail) if detail.code == LOCATION_NOT_FOUND_CODE => {
                Err(WeatherError::NotFound(q.to_string()))
            }
            Some(detail) => {
                error!(q, status = status.as_u16(), body = %body, "Weather API error response");
                let message = if detail.message.is_empty() {
                    "Error fetching weather data".to_string()
                } else {
                    detail.message
                };
                Err(WeatherError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
            None => {
                error!(q, status = status.as_u16(), body = %body, "Weather API error response");
                Err(WeatherError::Api {
                    status: status.as_u16(),
                    message: "Error fetching weather data".to_string(),
                })
            }
        }
    }
}

impl WeatherProvider for WeatherApiClient {
    fn current_by_city<'a>(&'a self, city: &'a str) -> WeatherFuture<'a> {
        Box::pin(self.current_weather(city))
    }

    fn current_by_coordinates(&self, lat: f64, lon: f64) -> WeatherFuture<'_> {
        Box::pin(self.current_weather_at(lat, lon))
    }
}
