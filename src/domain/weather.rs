use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current conditions as reported by the weather provider.
///
/// Field names follow the provider's payload so the report can be passed
/// straight through to clients. Fields not named here are kept in `extra`
/// and serialized back unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    #[serde(default)]
    pub localtime_epoch: i64,
    #[serde(default)]
    pub localtime: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    #[serde(default)]
    pub wind_mph: f64,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub cloud: u8,
    #[serde(default)]
    pub feelslike_c: f64,
    #[serde(default)]
    pub feelslike_f: f64,
    /// e.g. `last_updated`, `wind_dir`, `pressure_mb`, `precip_mm`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Condition {
    /// Free text such as "Light rain"; this is what the mood tables key on
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: u32,
}

impl WeatherReport {
    #[must_use]
    pub fn condition_text(&self) -> &str {
        &self.current.condition.text
    }
}
