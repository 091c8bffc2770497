use crate::domain::ProviderTrack;
use crate::error::TrackProviderError;
use std::future::Future;
use std::pin::Pin;

pub type TrackFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<ProviderTrack>, TrackProviderError>> + Send + 'a>>;

/// Source of tracks for the recommendation fallback chain.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
/// Implementations return `TrackProviderError::Empty` rather than an empty list.
pub trait TrackProvider: Send + Sync {
    /// Tracks tagged with `genre`.
    fn search_by_genre<'a>(&'a self, genre: &'a str) -> TrackFuture<'a>;

    /// Generic recommendations seeded by `genre`.
    fn recommendations_for_seed<'a>(&'a self, genre: &'a str) -> TrackFuture<'a>;

    /// Tracks of the provider's first featured playlist.
    fn featured_playlist_tracks(&self) -> TrackFuture<'_>;
}
