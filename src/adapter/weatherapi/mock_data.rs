//! Canned weather reports used when no usable API key is configured.

use serde_json::Map;

use crate::domain::weather::{Condition, CurrentConditions, Location, WeatherReport};

struct CannedCity {
    key: &'static str,
    name: &'static str,
    region: &'static str,
    country: &'static str,
    lat: f64,
    lon: f64,
    tz_id: &'static str,
    localtime: &'static str,
    temp_c: f64,
    temp_f: f64,
    condition: &'static str,
    icon: &'static str,
    code: u32,
    wind_mph: f64,
    wind_kph: f64,
    humidity: u8,
    cloud: u8,
    feelslike_c: f64,
    feelslike_f: f64,
}

const LOCALTIME_EPOCH: i64 = 1_627_930_589;

const CITIES: &[CannedCity] = &[
    CannedCity {
        key: "london",
        name: "London",
        region: "City of London, Greater London",
        country: "United Kingdom",
        lat: 51.52,
        lon: -0.11,
        tz_id: "Europe/London",
        localtime: "2021-08-02 17:36",
        temp_c: 19.0,
        temp_f: 66.2,
        condition: "Partly cloudy",
        icon: "//cdn.weatherapi.com/weather/64x64/day/116.png",
        code: 1003,
        wind_mph: 11.9,
        wind_kph: 19.1,
        humidity: 68,
        cloud: 75,
        feelslike_c: 19.0,
        feelslike_f: 66.2,
    },
    CannedCity {
        key: "newyork",
        name: "New York",
        region: "New York",
        country: "United States of America",
        lat: 40.71,
        lon: -74.01,
        tz_id: "America/New_York",
        localtime: "2021-08-02 12:36",
        temp_c: 24.0,
        temp_f: 75.2,
        condition: "Sunny",
        icon: "//cdn.weatherapi.com/weather/64x64/day/113.png",
        code: 1000,
        wind_mph: 8.1,
        wind_kph: 13.0,
        humidity: 55,
        cloud: 10,
        feelslike_c: 25.1,
        feelslike_f: 77.2,
    },
    CannedCity {
        key: "tokyo",
        name: "Tokyo",
        region: "Tokyo",
        country: "Japan",
        lat: 35.69,
        lon: 139.69,
        tz_id: "Asia/Tokyo",
        localtime: "2021-08-03 01:36",
        temp_c: 28.0,
        temp_f: 82.4,
        condition: "Clear",
        icon: "//cdn.weatherapi.com/weather/64x64/night/113.png",
        code: 1000,
        wind_mph: 5.6,
        wind_kph: 9.0,
        humidity: 70,
        cloud: 5,
        feelslike_c: 31.2,
        feelslike_f: 88.2,
    },
    CannedCity {
        key: "paris",
        name: "Paris",
        region: "Ile-de-France",
        country: "France",
        lat: 48.87,
        lon: 2.33,
        tz_id: "Europe/Paris",
        localtime: "2021-08-02 18:36",
        temp_c: 22.0,
        temp_f: 71.6,
        condition: "Light rain",
        icon: "//cdn.weatherapi.com/weather/64x64/day/296.png",
        code: 1183,
        wind_mph: 6.9,
        wind_kph: 11.2,
        humidity: 78,
        cloud: 85,
        feelslike_c: 22.0,
        feelslike_f: 71.6,
    },
    CannedCity {
        key: "sydney",
        name: "Sydney",
        region: "New South Wales",
        country: "Australia",
        lat: -33.87,
        lon: 151.21,
        tz_id: "Australia/Sydney",
        localtime: "2021-08-03 02:36",
        temp_c: 12.0,
        temp_f: 53.6,
        condition: "Heavy rain",
        icon: "//cdn.weatherapi.com/weather/64x64/night/308.png",
        code: 1195,
        wind_mph: 9.4,
        wind_kph: 15.1,
        humidity: 88,
        cloud: 100,
        feelslike_c: 10.3,
        feelslike_f: 50.5,
    },
];

impl CannedCity {
    fn report(&self) -> WeatherReport {
        WeatherReport {
            location: Location {
                name: self.name.to_string(),
                region: self.region.to_string(),
                country: self.country.to_string(),
                lat: self.lat,
                lon: self.lon,
                tz_id: self.tz_id.to_string(),
                localtime_epoch: LOCALTIME_EPOCH,
                localtime: self.localtime.to_string(),
                extra: Map::new(),
            },
            current: CurrentConditions {
                temp_c: self.temp_c,
                temp_f: self.temp_f,
                condition: Condition {
                    text: self.condition.to_string(),
                    icon: self.icon.to_string(),
                    code: self.code,
                },
                wind_mph: self.wind_mph,
                wind_kph: self.wind_kph,
                humidity: self.humidity,
                cloud: self.cloud,
                feelslike_c: self.feelslike_c,
                feelslike_f: self.feelslike_f,
                extra: Map::new(),
            },
        }
    }
}

/// Canned report for `city`.
///
/// The city is lowercased with whitespace removed, and the first canned key
/// containing it wins. Anything unmatched gets London.
#[must_use]
pub fn mock_for_city(city: &str) -> WeatherReport {
    let needle: String = city
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    CITIES
        .iter()
        .find(|canned| canned.key.contains(needle.as_str()))
        .unwrap_or(&CITIES[0])
        .report()
}

/// Canned report for any coordinates: always London.
#[must_use]
pub fn mock_for_coordinates() -> WeatherReport {
    CITIES[0].report()
}
