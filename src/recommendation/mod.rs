//! Weather condition to song recommendations.
//!
//! A request is planned synchronously (emotion, candidate genres, random
//! pick) and then served by the first track source that yields anything:
//! genre search, seeded recommendations, the featured playlist, and finally
//! the static catalogue.

mod plan;

pub use plan::MoodPlan;

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::fallback_tracks::{error_collection, fallback_tracks_for, first_covered_genre};
use crate::domain::{ProviderTrack, RecommendationResult, TrackRecord};
use crate::error::TrackProviderError;
use crate::port::TrackProvider;

/// Network steps of the fallback chain, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStage {
    GenreSearch,
    Recommendations,
    FeaturedPlaylist,
}

impl NetworkStage {
    pub const ORDER: [NetworkStage; 3] = [
        NetworkStage::GenreSearch,
        NetworkStage::Recommendations,
        NetworkStage::FeaturedPlaylist,
    ];
}

impl fmt::Display for NetworkStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetworkStage::GenreSearch => "genre_search",
            NetworkStage::Recommendations => "recommendations",
            NetworkStage::FeaturedPlaylist => "featured_playlist",
        })
    }
}

/// Where the songs of a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSource {
    Network(NetworkStage),
    /// Canned set for a covered candidate genre
    StaticCatalogue,
    /// Placeholders; no candidate genre has a canned set
    ErrorCollection,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub result: RecommendationResult,
    pub source: TrackSource,
}

/// Resolves weather conditions into recommendations. Never fails.
#[derive(Clone)]
pub struct Resolver {
    provider: Arc<dyn TrackProvider>,
}

impl Resolver {
    #[must_use]
    pub fn new(provider: Arc<dyn TrackProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, condition: &str) -> RecommendationResult {
        let plan = MoodPlan::draw(condition, &mut rand::rng());
        self.resolve_plan(plan).await.result
    }

    /// Runs the fallback chain for an already drawn plan.
    pub async fn resolve_plan(&self, plan: MoodPlan) -> Resolution {
        info!(
            condition = %plan.condition,
            emotion = plan.emotion,
            genre = plan.genre,
            "Weather mapped to genre"
        );

        for stage in NetworkStage::ORDER {
            match self.fetch(stage, plan.genre).await {
                Ok(tracks) if !tracks.is_empty() => {
                    info!(%stage, count = tracks.len(), genre = plan.genre, "Track source succeeded");
                    let songs = tracks.into_iter().map(TrackRecord::from).collect();
                    return Resolution {
                        result: RecommendationResult::new(
                            &plan.condition,
                            plan.emotion,
                            plan.genre,
                            songs,
                        ),
                        source: TrackSource::Network(stage),
                    };
                }
                Ok(_) => warn!(%stage, genre = plan.genre, "Track source returned nothing, falling back"),
                Err(e) => warn!(%stage, genre = plan.genre, error = %e, "Track source failed, falling back"),
            }
        }

        static_fallback(&plan)
    }

    async fn fetch(
        &self,
        stage: NetworkStage,
        genre: &str,
    ) -> Result<Vec<ProviderTrack>, TrackProviderError> {
        match stage {
            NetworkStage::GenreSearch => self.provider.search_by_genre(genre).await,
            NetworkStage::Recommendations => self.provider.recommendations_for_seed(genre).await,
            NetworkStage::FeaturedPlaylist => self.provider.featured_playlist_tracks().await,
        }
    }
}

fn static_fallback(plan: &MoodPlan) -> Resolution {
    let covered = first_covered_genre(plan.candidates)
        .and_then(|genre| fallback_tracks_for(genre).map(|songs| (genre, songs)));

    match covered {
        Some((genre, songs)) => {
            info!(emotion = plan.emotion, genre, "Using static fallback tracks");
            Resolution {
                result: RecommendationResult::new(&plan.condition, plan.emotion, genre, songs),
                source: TrackSource::StaticCatalogue,
            }
        }
        None => {
            warn!(
                emotion = plan.emotion,
                genre = plan.genre,
                "No static tracks for any candidate genre, returning placeholders"
            );
            Resolution {
                result: RecommendationResult::new(
                    &plan.condition,
                    plan.emotion,
                    plan.genre,
                    error_collection(),
                ),
                source: TrackSource::ErrorCollection,
            }
        }
    }
}
