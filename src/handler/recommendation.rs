use axum::Json;
use axum::extract::{Query, State};
use tracing::{error, info};

use super::{CityQuery, CoordinatesQuery, WeatherState};
use crate::domain::RecommendationResult;
use crate::error::{ApiError, WeatherError};

const RECOMMENDATION_FAILED: &str = "Failed to get music recommendations";

/// Handler for GET /weather/music-recommendation?city=
pub async fn recommendation_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<RecommendationResult>, ApiError> {
    let city = query.city()?;
    info!(city, "Getting music recommendation for city");

    let report = state
        .weather
        .current_by_city(city)
        .await
        .map_err(|e| {
            error!(city, error = %e, "Error getting music recommendation for city");
            match e {
                WeatherError::NotFound(_) => ApiError::NotFound("City not found".to_string()),
                _ => ApiError::Internal(RECOMMENDATION_FAILED.to_string()),
            }
        })?;

    let condition = report.condition_text();
    info!(city, condition, "Weather condition for city");

    Ok(Json(state.resolver.resolve(condition).await))
}

/// Handler for GET /weather/music-recommendation/coordinates?lat=&lon=
pub async fn recommendation_by_coordinates_handler(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<RecommendationResult>, ApiError> {
    let (lat, lon) = query.coordinates()?;
    info!(lat, lon, "Getting music recommendation for coordinates");

    let report = state
        .weather
        .current_by_coordinates(lat, lon)
        .await
        .map_err(|e| {
            error!(lat, lon, error = %e, "Error getting music recommendation for coordinates");
            match e {
                WeatherError::NotFound(_) => ApiError::BadRequest("Invalid coordinates".to_string()),
                _ => ApiError::Internal(RECOMMENDATION_FAILED.to_string()),
            }
        })?;

    let condition = report.condition_text();
    info!(lat, lon, condition, "Weather condition for coordinates");

    Ok(Json(state.resolver.resolve(condition).await))
}
