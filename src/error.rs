use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to build provider client: {0}")]
    Client(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failures of a single track provider call.
///
/// None of these reach the caller of the resolver: each one advances the
/// fallback chain to its next stage.
#[derive(Error, Debug)]
pub enum TrackProviderError {
    #[error("Failed to authenticate with Spotify: {0}")]
    Auth(String),

    #[error("Spotify returned no {0}")]
    Empty(&'static str),

    #[error("Spotify API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Weather API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not connect to Weather API: {0}")]
    Unavailable(String),
}

/// Error returned by HTTP handlers.
///
/// The body keeps the `{"error": "..."}` shape the frontend already reads.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::NotFound(_) => ApiError::NotFound("City not found".to_string()),
            WeatherError::Api { status, message } => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                message,
            },
            WeatherError::Unavailable(_) => {
                ApiError::Internal("Could not connect to Weather API".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_not_found_maps_to_404() {
        let err: ApiError = WeatherError::NotFound("Atlantis".into()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "City not found");
    }

    #[test]
    fn test_weather_api_error_keeps_provider_status() {
        let err: ApiError = WeatherError::Api {
            status: 401,
            message: "API key is invalid.".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "API key is invalid.");
    }

    #[test]
    fn test_weather_api_error_with_bogus_status_falls_back_to_400() {
        let err: ApiError = WeatherError::Api {
            status: 42,
            message: "odd".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_maps_to_500() {
        let err: ApiError = WeatherError::Unavailable("connection refused".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Could not connect to Weather API");
    }
}
