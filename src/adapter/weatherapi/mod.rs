//! weatherapi.com adapter with a canned-data mode.

pub mod client;
pub mod mock_data;

pub use client::{WeatherApiClient, WeatherApiConfig};
