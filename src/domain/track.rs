use serde::{Deserialize, Serialize};

pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A track as handed over by a track provider, before normalization.
///
/// Every field but the name may be missing in provider payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderTrack {
    pub name: String,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub preview_url: Option<String>,
    pub external_url: Option<String>,
    pub image_url: Option<String>,
}

/// A normalized song as returned to clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub title: String,
    /// Comma-joined when the track has several artists
    pub artist: String,
    pub album: String,
    pub preview_url: Option<String>,
    pub spotify_url: Option<String>,
    pub image_url: Option<String>,
}

impl TrackRecord {
    /// A canned track with no links, used by the static fallback.
    #[must_use]
    pub fn canned(title: &str, artist: &str, album: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            preview_url: None,
            spotify_url: None,
            image_url: None,
        }
    }
}

impl From<ProviderTrack> for TrackRecord {
    fn from(track: ProviderTrack) -> Self {
        Self {
            title: track.name,
            artist: track.artists.join(", "),
            album: track
                .album
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            preview_url: track.preview_url,
            spotify_url: track.external_url,
            image_url: track.image_url,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub weather_condition: String,
    pub emotional_state: String,
    pub recommended_genre: String,
    pub recommended_songs: Vec<TrackRecord>,
    pub message: String,
}

impl RecommendationResult {
    #[must_use]
    pub fn new(condition: &str, emotion: &str, genre: &str, songs: Vec<TrackRecord>) -> Self {
        Self {
            weather_condition: condition.to_string(),
            emotional_state: emotion.to_string(),
            recommended_genre: genre.to_string(),
            recommended_songs: songs,
            message: summary_message(condition, emotion, genre),
        }
    }
}

#[must_use]
pub fn summary_message(condition: &str, emotion: &str, genre: &str) -> String {
    format!("Based on the \"{condition}\" weather ({emotion} mood), we recommend {genre} music.")
}
