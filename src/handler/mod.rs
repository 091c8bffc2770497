pub mod health;
pub mod recommendation;
pub mod weather;

use std::sync::Arc;

use serde::Deserialize;

use crate::error::ApiError;
use crate::port::WeatherProvider;
use crate::recommendation::Resolver;

/// State shared by the `/weather` handlers.
#[derive(Clone)]
pub struct WeatherState {
    pub weather: Arc<dyn WeatherProvider>,
    pub resolver: Resolver,
}

pub(crate) const CITY_REQUIRED: &str = "City parameter is required";
pub(crate) const COORDINATES_REQUIRED: &str = "Latitude and longitude parameters are required";

/// Forecast days when `days` is absent or unparsable.
const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Query string of the city endpoints.
///
/// Every field is optional so a missing value becomes our own 400 body
/// rather than the extractor's rejection.
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
    pub days: Option<String>,
}

impl CityQuery {
    pub fn city(&self) -> Result<&str, ApiError> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .ok_or_else(|| ApiError::BadRequest(CITY_REQUIRED.to_string()))
    }

    pub fn days(&self) -> u8 {
        parse_days(self.days.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub days: Option<String>,
}

impl CoordinatesQuery {
    /// Both coordinates as finite numbers.
    pub fn coordinates(&self) -> Result<(f64, f64), ApiError> {
        let parse = |raw: Option<&str>| {
            raw.and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };

        match (parse(self.lat.as_deref()), parse(self.lon.as_deref())) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(ApiError::BadRequest(COORDINATES_REQUIRED.to_string())),
        }
    }

    pub fn days(&self) -> u8 {
        parse_days(self.days.as_deref())
    }
}

fn parse_days(raw: Option<&str>) -> u8 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_FORECAST_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_query(city: Option<&str>) -> CityQuery {
        CityQuery {
            city: city.map(str::to_string),
            days: None,
        }
    }

    fn coordinates_query(lat: Option<&str>, lon: Option<&str>) -> CoordinatesQuery {
        CoordinatesQuery {
            lat: lat.map(str::to_string),
            lon: lon.map(str::to_string),
            days: None,
        }
    }

    #[test]
    fn test_blank_city_is_rejected() {
        assert!(city_query(None).city().is_err());
        assert!(city_query(Some("  ")).city().is_err());
        assert_eq!(city_query(Some(" Paris ")).city().unwrap(), "Paris");
    }

    #[test]
    fn test_coordinates_must_both_parse() {
        assert_eq!(
            coordinates_query(Some("51.5"), Some("-0.12")).coordinates().unwrap(),
            (51.5, -0.12)
        );
        assert!(coordinates_query(Some("51.5"), None).coordinates().is_err());
        assert!(coordinates_query(Some("north"), Some("1")).coordinates().is_err());
        assert!(coordinates_query(Some("NaN"), Some("1")).coordinates().is_err());
    }

    #[test]
    fn test_days_defaults_to_three() {
        assert_eq!(parse_days(None), 3);
        assert_eq!(parse_days(Some("seven")), 3);
        assert_eq!(parse_days(Some("5")), 5);
    }
}
