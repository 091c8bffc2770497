//! Spotify Web API payloads, limited to the fields the service reads.

use serde::Deserialize;

use crate::domain::ProviderTrack;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: Option<Paging<SpotifyTrack>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationsResponse {
    #[serde(default)]
    pub tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeaturedPlaylistsResponse {
    pub playlists: Option<Paging<PlaylistSummary>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    /// Null for tracks removed from the catalogue
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    pub album: Option<SpotifyAlbum>,
    pub preview_url: Option<String>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyAlbum {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExternalUrls {
    pub spotify: Option<String>,
}

impl From<SpotifyTrack> for ProviderTrack {
    fn from(track: SpotifyTrack) -> Self {
        let (album, image_url) = match track.album {
            Some(album) => (album.name, album.images.into_iter().next().map(|i| i.url)),
            None => (None, None),
        };

        Self {
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            album,
            preview_url: track.preview_url,
            external_url: track.external_urls.and_then(|urls| urls.spotify),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_track_converts() {
        let raw = serde_json::json!({
            "name": "So What",
            "artists": [{ "name": "Miles Davis" }],
            "album": {
                "name": "Kind of Blue",
                "images": [{ "url": "https://i.scdn.co/large.jpg" }, { "url": "https://i.scdn.co/small.jpg" }]
            },
            "preview_url": "https://p.scdn.co/preview.mp3",
            "external_urls": { "spotify": "https://open.spotify.com/track/1" }
        });
        let track: ProviderTrack = serde_json::from_value::<SpotifyTrack>(raw).unwrap().into();

        assert_eq!(track.name, "So What");
        assert_eq!(track.artists, vec!["Miles Davis".to_string()]);
        assert_eq!(track.album.as_deref(), Some("Kind of Blue"));
        assert_eq!(track.image_url.as_deref(), Some("https://i.scdn.co/large.jpg"));
        assert_eq!(track.external_url.as_deref(), Some("https://open.spotify.com/track/1"));
    }

    #[test]
    fn test_sparse_track_converts() {
        let raw = serde_json::json!({ "name": "Bare", "preview_url": null });
        let track: ProviderTrack = serde_json::from_value::<SpotifyTrack>(raw).unwrap().into();

        assert!(track.artists.is_empty());
        assert!(track.album.is_none());
        assert!(track.image_url.is_none());
        assert!(track.preview_url.is_none());
        assert!(track.external_url.is_none());
    }
}
