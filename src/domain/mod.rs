pub mod fallback_tracks;
pub mod mood;
pub mod track;
pub mod weather;

pub use track::{ProviderTrack, RecommendationResult, TrackRecord};
pub use weather::WeatherReport;
