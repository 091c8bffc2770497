use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use moodcast::adapter::weatherapi::mock_data::mock_for_city;
use moodcast::app::main_router;
use moodcast::domain::RecommendationResult;
use moodcast::handler::WeatherState;
use moodcast::recommendation::Resolver;
use moodcast::test_support::{
    MockTrackProvider, MockWeatherProvider, StepBehavior, WeatherBehavior,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn create_test_app(weather: Arc<MockWeatherProvider>, tracks: Arc<MockTrackProvider>) -> Router {
    let state = WeatherState {
        weather,
        resolver: Resolver::new(tracks),
    };
    main_router(state, None).unwrap()
}

fn server_with(behavior: WeatherBehavior) -> (TestServer, Arc<MockWeatherProvider>) {
    let weather = Arc::new(MockWeatherProvider::new(behavior));
    let app = create_test_app(weather.clone(), Arc::new(MockTrackProvider::failing()));
    (TestServer::new(app).unwrap(), weather)
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let (server, _) = server_with(WeatherBehavior::NotFound);

    let response = server.get("/weather/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_current_weather_by_city() {
    let (server, weather) = server_with(WeatherBehavior::Report(mock_for_city("paris")));

    let response = server
        .get("/weather/current")
        .add_query_param("city", "Paris")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["location"]["name"], "Paris");
    assert_eq!(body["current"]["condition"]["text"], "Light rain");
    assert_eq!(weather.lookups(), vec!["Paris"]);
}

#[tokio::test]
async fn test_current_weather_keeps_unmodelled_provider_fields() {
    let report = serde_json::from_value(json!({
        "location": { "name": "Oslo", "lat": 59.91, "lon": 10.75 },
        "current": {
            "last_updated": "2023-11-14 23:00",
            "temp_c": -2.0, "temp_f": 28.4,
            "condition": { "text": "Light snow", "icon": "//icon.png", "code": 1213 },
            "wind_dir": "NNE", "pressure_mb": 1012.0, "precip_mm": 0.3
        }
    }))
    .unwrap();
    let (server, _) = server_with(WeatherBehavior::Report(report));

    let response = server
        .get("/weather/current")
        .add_query_param("city", "Oslo")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["current"]["last_updated"], "2023-11-14 23:00");
    assert_eq!(body["current"]["wind_dir"], "NNE");
    assert_eq!(body["current"]["pressure_mb"], 1012.0);
    assert_eq!(body["current"]["precip_mm"], 0.3);
}

#[tokio::test]
async fn test_missing_city_is_bad_request() {
    let (server, weather) = server_with(WeatherBehavior::Report(mock_for_city("paris")));

    for path in ["/weather/current", "/weather/forecast", "/weather/music-recommendation"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "City parameter is required" }));
    }
    assert!(weather.lookups().is_empty());
}

#[tokio::test]
async fn test_unknown_city_is_not_found() {
    let (server, _) = server_with(WeatherBehavior::NotFound);

    let response = server
        .get("/weather/current")
        .add_query_param("city", "Atlantis")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "City not found" }));
}

#[tokio::test]
async fn test_provider_status_is_passed_through() {
    let (server, _) = server_with(WeatherBehavior::Api {
        status: 400,
        message: "Parameter q is missing.".to_string(),
    });

    let response = server
        .get("/weather/forecast")
        .add_query_param("city", "x")
        .add_query_param("days", "5")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Parameter q is missing." }));
}

#[tokio::test]
async fn test_unreachable_provider_is_internal_error() {
    let (server, _) = server_with(WeatherBehavior::Unavailable);

    let response = server
        .get("/weather/current")
        .add_query_param("city", "Oslo")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Could not connect to Weather API" }));
}

#[tokio::test]
async fn test_coordinates_are_required_and_numeric() {
    let (server, weather) = server_with(WeatherBehavior::Report(mock_for_city("london")));

    let missing = server
        .get("/weather/current/coordinates")
        .add_query_param("lat", "51.5")
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    missing.assert_json(&json!({ "error": "Latitude and longitude parameters are required" }));

    let garbled = server
        .get("/weather/music-recommendation/coordinates")
        .add_query_param("lat", "north")
        .add_query_param("lon", "-0.1")
        .await;
    garbled.assert_status(StatusCode::BAD_REQUEST);

    assert!(weather.lookups().is_empty());
}

#[tokio::test]
async fn test_forecast_by_coordinates_returns_current_conditions() {
    let (server, weather) = server_with(WeatherBehavior::Report(mock_for_city("london")));

    let response = server
        .get("/weather/forecast/coordinates")
        .add_query_param("lat", "51.52")
        .add_query_param("lon", "-0.11")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["location"]["name"], "London");
    assert_eq!(weather.lookups(), vec!["51.52,-0.11"]);
}

#[tokio::test]
async fn test_coordinates_not_found_is_invalid_coordinates() {
    let (server, _) = server_with(WeatherBehavior::NotFound);

    for path in [
        "/weather/current/coordinates",
        "/weather/music-recommendation/coordinates",
    ] {
        let response = server
            .get(path)
            .add_query_param("lat", "999")
            .add_query_param("lon", "999")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid coordinates" }));
    }
}

#[tokio::test]
async fn test_recommendation_for_heavy_rain_city() {
    let (server, _) = server_with(WeatherBehavior::Report(mock_for_city("sydney")));

    let response = server
        .get("/weather/music-recommendation")
        .add_query_param("city", "Sydney")
        .await;

    response.assert_status_ok();
    let result: RecommendationResult = response.json();
    assert_eq!(result.weather_condition, "Heavy rain");
    assert_eq!(result.emotional_state, "intense");
    assert_eq!(result.recommended_genre, "metal");
    assert_eq!(result.recommended_songs.len(), 3);
    assert_eq!(
        result.message,
        "Based on the \"Heavy rain\" weather (intense mood), we recommend metal music."
    );
}

#[tokio::test]
async fn test_recommendation_uses_camel_case_keys() {
    let weather = Arc::new(MockWeatherProvider::reporting(mock_for_city("newyork")));
    let tracks = Arc::new(MockTrackProvider::new(
        StepBehavior::tracks(&["Walking on Sunshine"]),
        StepBehavior::Fail,
        StepBehavior::Fail,
    ));
    let server = TestServer::new(create_test_app(weather, tracks)).unwrap();

    let response = server
        .get("/weather/music-recommendation")
        .add_query_param("city", "New York")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["weatherCondition"], "Sunny");
    assert_eq!(body["emotionalState"], "happy");
    let song = &body["recommendedSongs"][0];
    assert_eq!(song["title"], "Walking on Sunshine");
    assert_eq!(song["artist"], "Test Artist");
    assert_eq!(song["previewUrl"], Value::Null);
    assert_eq!(
        song["spotifyUrl"],
        "https://open.spotify.com/track/Walking on Sunshine"
    );
}

#[tokio::test]
async fn test_recommendation_weather_failure_is_wrapped() {
    let (server, _) = server_with(WeatherBehavior::Api {
        status: 401,
        message: "API key is invalid.".to_string(),
    });

    let response = server
        .get("/weather/music-recommendation")
        .add_query_param("city", "Oslo")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to get music recommendations" }));
}

#[tokio::test]
async fn test_recommendation_unknown_city_is_not_found() {
    let (server, _) = server_with(WeatherBehavior::NotFound);

    let response = server
        .get("/weather/music-recommendation")
        .add_query_param("city", "Atlantis")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "City not found" }));
}
