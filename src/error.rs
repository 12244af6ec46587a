use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the AccuWeather hourly-weather flow.
///
/// NWS-side failures never reach this type; those tools recover locally and
/// return sentinel text instead (see `formatters`).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// City search returned zero matches
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// City search returned a non-success status
    #[error("location search failed with status {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// Transport failure or a response that does not match the expected shape
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}
