use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// Active alerts for an area, classified by what the service sent back.
#[derive(Debug)]
pub enum AlertFeed {
    /// No `features` collection in the response
    Missing,
    /// `features` present but blank
    Empty,
    Features(Vec<AlertFeature>),
}

impl AlertFeed {
    pub fn from_value(data: &Value) -> Self {
        match data.get("features") {
            None => AlertFeed::Missing,
            Some(features) if is_blank(features) => AlertFeed::Empty,
            Some(Value::Array(items)) => {
                AlertFeed::Features(items.iter().map(AlertFeature::from_value).collect())
            }
            Some(_) => AlertFeed::Missing,
        }
    }
}

/// True for null, false, zero, and empty strings, arrays, or objects.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: Option<AlertProperties>,
}

impl AlertFeature {
    /// Decodes one feature; a feature that is not an object renders as placeholders.
    pub fn from_value(value: &Value) -> Self {
        AlertFeature::deserialize(value).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    #[serde(default, deserialize_with = "lenient_text")]
    pub event: Option<String>,
    #[serde(rename = "areaDesc", default, deserialize_with = "lenient_text")]
    pub area_desc: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub instruction: Option<String>,
}

/// Accepts any JSON value: strings as-is, null as absent, anything else as its JSON text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the forecast resource covering the point
    pub forecast: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: Number,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    #[serde(alias = "state")]
    pub region_code: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}
