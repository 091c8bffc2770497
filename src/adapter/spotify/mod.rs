//! Spotify Web API adapter (client-credentials flow).

pub mod auth;
pub mod client;
mod models;

pub use auth::{SpotifyCredentials, TokenCache};
pub use client::{SpotifyClient, SpotifyConfig};
