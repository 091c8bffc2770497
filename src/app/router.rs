use crate::error::AppError;
use crate::handler::WeatherState;
use crate::handler::health::health_handler;
use crate::handler::recommendation::{
    recommendation_by_coordinates_handler, recommendation_handler,
};
use crate::handler::weather::{
    current_by_coordinates_handler, current_handler, forecast_by_coordinates_handler,
    forecast_handler,
};
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Routes served under `/weather`.
pub fn weather_routes(state: WeatherState) -> Router {
    Router::new()
        .route("/current", get(current_handler))
        .route("/forecast", get(forecast_handler))
        .route("/current/coordinates", get(current_by_coordinates_handler))
        .route("/forecast/coordinates", get(forecast_by_coordinates_handler))
        .route("/music-recommendation", get(recommendation_handler))
        .route(
            "/music-recommendation/coordinates",
            get(recommendation_by_coordinates_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Build the full HTTP router with request tracing and CORS.
pub fn main_router(state: WeatherState, cors_allow_origin: Option<&str>) -> Result<Router, AppError> {
    Ok(Router::new()
        .nest("/weather", weather_routes(state))
        .layer(cors_layer(cors_allow_origin)?)
        .layer(TraceLayer::new_for_http()))
}

/// Permissive unless a single allowed origin is configured.
fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer, AppError> {
    match allow_origin {
        None => Ok(CorsLayer::permissive()),
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .map_err(|e| AppError::Config(format!("invalid CORS_ALLOW_ORIGIN: {e}")))?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET])
                .allow_headers(Any))
        }
    }
}
