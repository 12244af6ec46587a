use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Fully-qualified URL of the gridpoint forecast for this point
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
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// AccuWeather API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LocationSearchResult {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "LocalizedName")]
    pub localized_name: String,
    #[serde(rename = "Country")]
    pub country: CountryInfo,
}

#[derive(Debug, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "LocalizedName")]
    pub localized_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentObservation {
    #[serde(rename = "Temperature")]
    pub temperature: MetricTemperature,
    #[serde(rename = "WeatherText")]
    pub weather_text: String,
    #[serde(rename = "RelativeHumidity")]
    pub relative_humidity: Option<f64>,
    #[serde(rename = "HasPrecipitation", default)]
    pub has_precipitation: bool,
    #[serde(rename = "LocalObservationDateTime")]
    pub observation_time: String,
}

#[derive(Debug, Deserialize)]
pub struct MetricTemperature {
    #[serde(rename = "Metric")]
    pub metric: UnitValue,
}

#[derive(Debug, Deserialize)]
pub struct UnitValue {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Unit")]
    pub unit: String,
}

#[derive(Debug, Deserialize)]
pub struct HourlyPeriod {
    #[serde(rename = "Temperature")]
    pub temperature: UnitValue,
    #[serde(rename = "IconPhrase")]
    pub icon_phrase: String,
    #[serde(rename = "PrecipitationProbability")]
    pub precipitation_probability: f64,
    #[serde(rename = "PrecipitationType")]
    pub precipitation_type: Option<String>,
    #[serde(rename = "PrecipitationIntensity")]
    pub precipitation_intensity: Option<String>,
}

// ============================================================================
// Resolved Location & Normalized Result Models
// ============================================================================

/// A location resolved through the AccuWeather city search.
///
/// Also the value type of the on-disk location cache, so a cache hit carries
/// the display name and country without a fresh search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub key: String,
    pub localized_name: String,
    pub country: String,
}

/// Sentinel emitted when the current-conditions payload is missing or empty
pub const NO_CURRENT_CONDITIONS: &str = "No current conditions available";

/// Current conditions, or a fixed sentinel string when unavailable.
///
/// Untagged so the available variant serializes as a plain object and the
/// unavailable variant as a bare string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CurrentConditions {
    Available(CurrentConditionsReport),
    Unavailable(String),
}

impl CurrentConditions {
    pub fn unavailable() -> Self {
        Self::Unavailable(NO_CURRENT_CONDITIONS.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditionsReport {
    pub temperature_value: f64,
    pub temperature_unit: String,
    pub weather_text: String,
    pub relative_humidity: Option<f64>,
    pub has_precipitation: bool,
    pub observation_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyForecastPoint {
    /// Hours from now, starting at 1 for the first upstream element
    pub relative_offset_hours: u32,
    pub temperature_value: f64,
    pub temperature_unit: String,
    pub weather_text: String,
    pub precipitation_probability: f64,
    pub precipitation_type: Option<String>,
    pub precipitation_intensity: Option<String>,
}

/// The value returned by the `get_hourly_weather` tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyWeatherResult {
    pub location: String,
    pub location_key: String,
    pub country: String,
    pub current_conditions: CurrentConditions,
    pub hourly_forecast: Vec<HourlyForecastPoint>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetHourlyWeatherRequest {
    /// Free-text location, e.g. a city name
    pub location: String,
}
