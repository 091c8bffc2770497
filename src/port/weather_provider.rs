use crate::domain::WeatherReport;
use crate::error::WeatherError;
use std::future::Future;
use std::pin::Pin;

pub type WeatherFuture<'a> =
    Pin<Box<dyn Future<Output = Result<WeatherReport, WeatherError>> + Send + 'a>>;

/// Current-conditions lookup, by city name or coordinates.
pub trait WeatherProvider: Send + Sync {
    fn current_by_city<'a>(&'a self, city: &'a str) -> WeatherFuture<'a>;

    fn current_by_coordinates(&self, lat: f64, lon: f64) -> WeatherFuture<'_>;
}
