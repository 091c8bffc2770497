use axum::Json;
use axum::extract::{Query, State};
use tracing::{error, info};

use super::{CityQuery, CoordinatesQuery, WeatherState};
use crate::domain::WeatherReport;
use crate::error::{ApiError, WeatherError};

const INVALID_COORDINATES: &str = "Invalid coordinates";

/// Handler for GET /weather/current?city=
pub async fn current_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = query.city()?;
    let report = state.weather.current_by_city(city).await.map_err(|e| {
        error!(city, error = %e, "Error fetching weather data");
        ApiError::from(e)
    })?;
    Ok(Json(report))
}

/// Handler for GET /weather/forecast?city=&days=
///
/// Answers with current conditions; `days` is accepted for compatibility.
pub async fn forecast_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = query.city()?;
    info!(city, days = query.days(), "Forecast requested");
    let report = state.weather.current_by_city(city).await.map_err(|e| {
        error!(city, error = %e, "Error fetching forecast data");
        ApiError::from(e)
    })?;
    Ok(Json(report))
}

/// Handler for GET /weather/current/coordinates?lat=&lon=
pub async fn current_by_coordinates_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let (lat, lon) = query.coordinates()?;
    let report = state
        .weather
        .current_by_coordinates(lat, lon)
        .await
        .map_err(|e| coordinates_error(lat, lon, e))?;
    Ok(Json(report))
}

/// Handler for GET /weather/forecast/coordinates?lat=&lon=&days=
pub async fn forecast_by_coordinates_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let (lat, lon) = query.coordinates()?;
    info!(lat, lon, days = query.days(), "Forecast requested");
    let report = state
        .weather
        .current_by_coordinates(lat, lon)
        .await
        .map_err(|e| coordinates_error(lat, lon, e))?;
    Ok(Json(report))
}

fn coordinates_error(lat: f64, lon: f64, err: WeatherError) -> ApiError {
    error!(lat, lon, error = %err, "Error fetching weather data for coordinates");
    match err {
        WeatherError::NotFound(_) => ApiError::BadRequest(INVALID_COORDINATES.to_string()),
        other => ApiError::from(other),
    }
}
