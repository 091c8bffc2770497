pub mod track_provider;
pub mod weather_provider;

pub use track_provider::TrackProvider;
pub use weather_provider::WeatherProvider;
