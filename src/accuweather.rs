use reqwest::Client;

use crate::cache::LocationCache;
use crate::constants::{ACCUWEATHER_API_BASE, USER_AGENT};
use crate::error::WeatherError;
use crate::models::{
    CurrentObservation, HourlyPeriod, HourlyWeatherResult, LocationSearchResult, ResolvedLocation,
};
use crate::normalize::normalize;

/// Client for the AccuWeather city-search, current-conditions and hourly
/// forecast endpoints.
///
/// No per-request timeout is set here; only the NWS client enforces one.
#[derive(Debug, Clone)]
pub struct AccuWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AccuWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, ACCUWEATHER_API_BASE)
    }

    /// Builds a client against an alternate base URL, used by tests to point
    /// at a mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Resolves a free-text location to its AccuWeather key plus display
    /// metadata, consulting the cache first.
    ///
    /// On a miss the city search is queried and the first result wins; an
    /// empty result list or a non-success status is fatal. The resolved
    /// location is cached before returning.
    pub async fn resolve_location(
        &self,
        cache: &LocationCache,
        query: &str,
    ) -> Result<ResolvedLocation, WeatherError> {
        if let Some(hit) = cache.lookup(query) {
            tracing::debug!("Location cache hit for '{}': {}", query, hit.key);
            return Ok(hit);
        }

        let url = format!("{}/locations/v1/cities/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::UpstreamStatus { status, body });
        }

        let results: Vec<LocationSearchResult> = response.json().await?;
        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(query.to_string()))?;

        let resolved = ResolvedLocation {
            key: first.key,
            localized_name: first.localized_name,
            country: first.country.localized_name,
        };
        cache.store(query, &resolved);

        Ok(resolved)
    }

    async fn current_conditions(&self, key: &str) -> Result<Vec<CurrentObservation>, WeatherError> {
        let url = format!("{}/currentconditions/v1/{}", self.base_url, key);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;
        Ok(response.json().await?)
    }

    async fn hourly_forecast(&self, key: &str) -> Result<Vec<HourlyPeriod>, WeatherError> {
        let url = format!("{}/forecasts/v1/hourly/12hour/{}", self.base_url, key);
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("metric", "true")])
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// Runs the full hourly-weather pipeline: resolve, fetch current
    /// conditions and the 12-hour forecast sequentially, normalize.
    ///
    /// A failed current-conditions fetch degrades to the unavailable marker;
    /// a failed hourly fetch propagates. This asymmetry is deliberate.
    pub async fn fetch_hourly(
        &self,
        cache: &LocationCache,
        query: &str,
    ) -> Result<HourlyWeatherResult, WeatherError> {
        let resolved = self.resolve_location(cache, query).await?;

        let current = match self.current_conditions(&resolved.key).await {
            Ok(observations) => observations,
            Err(e) => {
                tracing::warn!(
                    "Current conditions unavailable for {}: {}",
                    resolved.key,
                    e
                );
                Vec::new()
            }
        };

        let hourly = self.hourly_forecast(&resolved.key).await?;

        Ok(normalize(current, hourly, &resolved))
    }
}
