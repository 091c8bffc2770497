//! Resolver against a stubbed Spotify API.

use moodcast::adapter::spotify::{SpotifyClient, SpotifyConfig, SpotifyCredentials};
use moodcast::recommendation::{MoodPlan, NetworkStage, Resolver, TrackSource};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn spotify_resolver(server: &MockServer, client_secret: &str) -> Resolver {
    let client = SpotifyClient::new(SpotifyConfig {
        api_base_url: format!("{}/v1", server.uri()),
        accounts_url: server.uri(),
        market: "US".to_string(),
        credentials: SpotifyCredentials {
            client_id: "client".to_string(),
            client_secret: client_secret.to_string(),
        },
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    Resolver::new(Arc::new(client))
}

fn rain_plan(genre: &'static str) -> MoodPlan {
    MoodPlan {
        condition: "Heavy rain".to_string(),
        emotion: "intense",
        candidates: moodcast::domain::mood::genres_for("intense"),
        genre,
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

fn track(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "artists": [{ "name": "Band" }],
        "album": { "name": "", "images": [] },
        "preview_url": null,
        "external_urls": { "spotify": "https://open.spotify.com/track/x" }
    })
}

#[tokio::test]
async fn test_search_result_is_used_when_available() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "genre:rock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tracks": { "items": [track("Thunderstruck")] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recommendations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolution = spotify_resolver(&server, "secret")
        .resolve_plan(rain_plan("rock"))
        .await;

    assert_eq!(
        resolution.source,
        TrackSource::Network(NetworkStage::GenreSearch)
    );
    let song = &resolution.result.recommended_songs[0];
    assert_eq!(song.title, "Thunderstruck");
    // Empty album name is normalized
    assert_eq!(song.album, "Unknown Album");
    assert_eq!(resolution.result.recommended_genre, "rock");

    server.verify().await;
}

#[tokio::test]
async fn test_failed_search_falls_back_to_recommendations() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recommendations"))
        .and(query_param("seed_genres", "electronic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tracks": [track("Strobe")]
        })))
        .mount(&server)
        .await;

    let resolution = spotify_resolver(&server, "secret")
        .resolve_plan(rain_plan("electronic"))
        .await;

    assert_eq!(
        resolution.source,
        TrackSource::Network(NetworkStage::Recommendations)
    );
    assert_eq!(resolution.result.recommended_songs[0].title, "Strobe");
}

#[tokio::test]
async fn test_empty_results_fall_through_to_featured_playlist() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "tracks": { "items": [] } })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "tracks": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/browse/featured-playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "playlists": { "items": [{ "id": "top", "name": "Top" }] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/top/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{ "track": null }, { "track": track("Featured") }]
        })))
        .mount(&server)
        .await;

    let resolution = spotify_resolver(&server, "secret")
        .resolve_plan(rain_plan("metal"))
        .await;

    assert_eq!(
        resolution.source,
        TrackSource::Network(NetworkStage::FeaturedPlaylist)
    );
    assert_eq!(resolution.result.recommended_songs.len(), 1);
    assert_eq!(resolution.result.recommended_songs[0].title, "Featured");
}

#[tokio::test]
async fn test_rejected_credentials_end_in_static_catalogue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolution = spotify_resolver(&server, "wrong")
        .resolve_plan(rain_plan("cinematic"))
        .await;

    assert_eq!(resolution.source, TrackSource::StaticCatalogue);
    assert_eq!(resolution.result.recommended_genre, "metal");
    assert_eq!(
        resolution.result.recommended_songs[0].title,
        "Master of Puppets"
    );

    server.verify().await;
}

#[tokio::test]
async fn test_missing_credentials_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = spotify_resolver(&server, "").resolve("Sunny").await;

    assert_eq!(result.emotional_state, "happy");
    assert_eq!(result.recommended_genre, "pop");
    assert_eq!(result.recommended_songs[0].title, "Shape of You");

    server.verify().await;
}
