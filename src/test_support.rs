//! Shared test support utilities
//!
//! Scripted `TrackProvider` and `WeatherProvider` implementations for unit and
//! integration tests.

use crate::domain::{ProviderTrack, WeatherReport};
use crate::error::{TrackProviderError, WeatherError};
use crate::port::track_provider::TrackFuture;
use crate::port::weather_provider::WeatherFuture;
use crate::port::{TrackProvider, WeatherProvider};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted outcome of one track provider step.
#[derive(Debug, Clone)]
pub enum StepBehavior {
    Tracks(Vec<ProviderTrack>),
    /// `TrackProviderError::Empty`
    Empty,
    /// `Ok` with no tracks
    EmptyList,
    /// A non-2xx provider response
    Fail,
}

impl StepBehavior {
    /// Tracks named `names`, each by "Test Artist".
    pub fn tracks(names: &[&str]) -> Self {
        StepBehavior::Tracks(
            names
                .iter()
                .map(|name| ProviderTrack {
                    name: (*name).to_string(),
                    artists: vec!["Test Artist".to_string()],
                    album: Some("Test Album".to_string()),
                    external_url: Some(format!("https://open.spotify.com/track/{name}")),
                    ..ProviderTrack::default()
                })
                .collect(),
        )
    }

    fn outcome(&self, what: &'static str) -> Result<Vec<ProviderTrack>, TrackProviderError> {
        match self {
            StepBehavior::Tracks(tracks) => Ok(tracks.clone()),
            StepBehavior::Empty => Err(TrackProviderError::Empty(what)),
            StepBehavior::EmptyList => Ok(Vec::new()),
            StepBehavior::Fail => Err(TrackProviderError::Api {
                status: 503,
                body: "mock failure".to_string(),
            }),
        }
    }
}

/// Track provider with one scripted behavior per fallback step.
pub struct MockTrackProvider {
    search: StepBehavior,
    recommendations: StepBehavior,
    featured: StepBehavior,
    search_calls: AtomicUsize,
    recommendation_calls: AtomicUsize,
    featured_calls: AtomicUsize,
    requested_genres: Mutex<Vec<String>>,
}

impl MockTrackProvider {
    pub fn new(search: StepBehavior, recommendations: StepBehavior, featured: StepBehavior) -> Self {
        Self {
            search,
            recommendations,
            featured,
            search_calls: AtomicUsize::new(0),
            recommendation_calls: AtomicUsize::new(0),
            featured_calls: AtomicUsize::new(0),
            requested_genres: Mutex::new(Vec::new()),
        }
    }

    /// Every step fails.
    pub fn failing() -> Self {
        Self::new(StepBehavior::Fail, StepBehavior::Fail, StepBehavior::Fail)
    }

    /// Calls made to (search, recommendations, featured playlist).
    pub fn calls(&self) -> [usize; 3] {
        [
            self.search_calls.load(Ordering::SeqCst),
            self.recommendation_calls.load(Ordering::SeqCst),
            self.featured_calls.load(Ordering::SeqCst),
        ]
    }

    /// Genres passed to search and recommendations, in call order.
    pub fn requested_genres(&self) -> Vec<String> {
        self.requested_genres.lock().clone()
    }
}

impl TrackProvider for MockTrackProvider {
    fn search_by_genre<'a>(&'a self, genre: &'a str) -> TrackFuture<'a> {
        Box::pin(async move {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.requested_genres.lock().push(genre.to_string());
            self.search.outcome("search results")
        })
    }

    fn recommendations_for_seed<'a>(&'a self, genre: &'a str) -> TrackFuture<'a> {
        Box::pin(async move {
            self.recommendation_calls.fetch_add(1, Ordering::SeqCst);
            self.requested_genres.lock().push(genre.to_string());
            self.recommendations.outcome("recommendations")
        })
    }

    fn featured_playlist_tracks(&self) -> TrackFuture<'_> {
        Box::pin(async move {
            self.featured_calls.fetch_add(1, Ordering::SeqCst);
            self.featured.outcome("featured playlists")
        })
    }
}

/// Scripted outcome of a weather lookup.
#[derive(Debug, Clone)]
pub enum WeatherBehavior {
    Report(WeatherReport),
    NotFound,
    Api { status: u16, message: String },
    Unavailable,
}

/// Weather provider answering every lookup with the same scripted outcome.
pub struct MockWeatherProvider {
    behavior: WeatherBehavior,
    lookups: Mutex<Vec<String>>,
}

impl MockWeatherProvider {
    pub fn new(behavior: WeatherBehavior) -> Self {
        Self {
            behavior,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Answers with `report` for any location.
    pub fn reporting(report: WeatherReport) -> Self {
        Self::new(WeatherBehavior::Report(report))
    }

    /// Queries received, cities verbatim and coordinates as "lat,lon".
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }

    fn answer(&self, query: String) -> Result<WeatherReport, WeatherError> {
        self.lookups.lock().push(query.clone());
        match &self.behavior {
            WeatherBehavior::Report(report) => Ok(report.clone()),
            WeatherBehavior::NotFound => Err(WeatherError::NotFound(query)),
            WeatherBehavior::Api { status, message } => Err(WeatherError::Api {
                status: *status,
                message: message.clone(),
            }),
            WeatherBehavior::Unavailable => {
                Err(WeatherError::Unavailable("connection refused".to_string()))
            }
        }
    }
}

impl WeatherProvider for MockWeatherProvider {
    fn current_by_city<'a>(&'a self, city: &'a str) -> WeatherFuture<'a> {
        Box::pin(async move { self.answer(city.to_string()) })
    }

    fn current_by_coordinates(&self, lat: f64, lon: f64) -> WeatherFuture<'_> {
        Box::pin(async move { self.answer(format!("{lat},{lon}")) })
    }
}
