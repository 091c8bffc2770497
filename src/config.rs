use std::env;
use std::fs;
use std::time::Duration;

use tracing::warn;

use crate::error::AppError;

const DEFAULT_HTTP_PORT: &str = "3001";
const DEFAULT_WEATHER_API_BASE_URL: &str = "https://api.weatherapi.com/v1";
const DEFAULT_SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const DEFAULT_SPOTIFY_MARKET: &str = "US";
const DEFAULT_PROVIDER_TIMEOUT_MS: &str = "10000";

/// Value shipped in the sample `.env`; treated the same as an unset key.
pub const PLACEHOLDER_WEATHER_API_KEY: &str = "your_api_key";

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_port: u16,
    pub weather_api_key: Option<String>,
    pub weather_api_base_url: String,
    /// Serve canned weather instead of calling the provider
    pub use_mock_weather: bool,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_base_url: String,
    pub spotify_accounts_url: String,
    pub spotify_market: String,
    /// Applied to every outbound provider request
    pub provider_timeout: Duration,
    /// `None` allows any origin
    pub cors_allow_origin: Option<String>,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    ///
    /// Missing Spotify credentials are only warned about: the resolver
    /// still answers from its static catalogue.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_port(self.http_port)?;
        validate_url("WEATHER_API_BASE_URL", &self.weather_api_base_url)?;
        validate_url("SPOTIFY_API_BASE_URL", &self.spotify_api_base_url)?;
        validate_url("SPOTIFY_ACCOUNTS_URL", &self.spotify_accounts_url)?;
        if self.provider_timeout.is_zero() {
            return Err(AppError::Config(
                "PROVIDER_TIMEOUT_MS cannot be 0".into(),
            ));
        }
        if self.spotify_market.trim().is_empty() {
            return Err(AppError::Config("SPOTIFY_MARKET cannot be empty".into()));
        }

        if !self.has_spotify_credentials() {
            warn!("Spotify credentials are not configured; recommendations will use local fallback songs");
        }
        Ok(())
    }

    #[must_use]
    pub fn has_spotify_credentials(&self) -> bool {
        !self.spotify_client_id.is_empty() && !self.spotify_client_secret.is_empty()
    }

    /// Whether the weather client should skip the network entirely.
    #[must_use]
    pub fn weather_mock_mode(&self) -> bool {
        self.use_mock_weather
            || self
                .weather_api_key
                .as_deref()
                .is_none_or(|key| key.is_empty() || key == PLACEHOLDER_WEATHER_API_KEY)
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), AppError> {
    if port == 0 {
        return Err(AppError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_url(name: &str, url: &str) -> Result<(), AppError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "{name} must be an http(s) URL, got {url:?}"
        )));
    }
    Ok(())
}

/// Read a value through `lookup`, with support for the `_FILE` suffix (Docker Secrets)
fn get_var_or_file<F>(lookup: &F, name: &str) -> Result<Option<String>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let file_var = format!("{name}_FILE");
    if let Some(file_path) = lookup(&file_var) {
        return match fs::read_to_string(&file_path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) => Err(AppError::Config(format!("Failed to read {file_var}: {e}"))),
        };
    }
    Ok(lookup(name))
}

fn parse_var<F, T>(lookup: &F, name: &str, default: &str) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::Config(format!("Invalid value for {name} ({raw:?}): {e}")))
}

/// Builds settings from an arbitrary variable source.
///
/// `get_configuration` passes the process environment; tests pass a map.
pub fn settings_from<F>(lookup: F) -> Result<Settings, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let http_port = parse_var::<_, u16>(&lookup, "HTTP_PORT", DEFAULT_HTTP_PORT)?;
    let weather_api_key = get_var_or_file(&lookup, "WEATHER_API_KEY")?;
    let weather_api_base_url = lookup("WEATHER_API_BASE_URL")
        .unwrap_or_else(|| DEFAULT_WEATHER_API_BASE_URL.to_string());
    let use_mock_weather = lookup("USE_MOCK_DATA").is_some_and(|v| v == "true");

    let spotify_client_id = lookup("SPOTIFY_CLIENT_ID").unwrap_or_default();
    let spotify_client_secret =
        get_var_or_file(&lookup, "SPOTIFY_CLIENT_SECRET")?.unwrap_or_default();
    let spotify_api_base_url = lookup("SPOTIFY_API_BASE_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_API_BASE_URL.to_string());
    let spotify_accounts_url = lookup("SPOTIFY_ACCOUNTS_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string());
    let spotify_market =
        lookup("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_SPOTIFY_MARKET.to_string());

    let provider_timeout_ms =
        parse_var::<_, u64>(&lookup, "PROVIDER_TIMEOUT_MS", DEFAULT_PROVIDER_TIMEOUT_MS)?;
    let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN").filter(|v| !v.trim().is_empty());

    let settings = Settings {
        http_port,
        weather_api_key,
        weather_api_base_url,
        use_mock_weather,
        spotify_client_id,
        spotify_client_secret,
        spotify_api_base_url,
        spotify_accounts_url,
        spotify_market,
        provider_timeout: Duration::from_millis(provider_timeout_ms),
        cors_allow_origin,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}

pub fn get_configuration() -> Result<Settings, AppError> {
    settings_from(|name| env::var(name).ok())
}
