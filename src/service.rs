use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Deserialize;

use crate::accuweather::AccuWeatherClient;
use crate::cache::LocationCache;
use crate::config::Config;
use crate::constants::{NWS_API_BASE, NWS_REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::WeatherError;
use crate::formatters::{format_alerts, format_forecast, FORECAST_POINTS_UNAVAILABLE};
use crate::models::{
    AlertResponse, ForecastResponse, GetAlertsRequest, GetForecastRequest,
    GetHourlyWeatherRequest, PointsResponse,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    accuweather: AccuWeatherClient,
    cache: Arc<LocationCache>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(NWS_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            accuweather: AccuWeatherClient::new(config.accuweather_api_key)?,
            cache: Arc::new(LocationCache::new(config.cache_path)),
            tool_router: Self::tool_router(),
        })
    }

    /// Makes an NWS HTTP GET request and deserializes the JSON response
    async fn make_nws_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service. Provides US weather alerts and forecasts \
                via the National Weather Service, and hourly forecasts with current \
                conditions for any city via AccuWeather."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let url = format!("{}/alerts/active/area/{}", NWS_API_BASE, request.state);
        let outcome = self.make_nws_request::<AlertResponse>(&url).await;

        Ok(CallToolResult::success(vec![Content::text(format_alerts(
            outcome,
        ))]))
    }

    /// Gets a multi-day forecast for a coordinate pair
    #[tool(description = "Get weather forecast for a location. Provide latitude and longitude (e.g., latitude: 40.7128, longitude: -74.0060 for New York).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let points_url = format!(
            "{}/points/{},{}",
            NWS_API_BASE, request.latitude, request.longitude
        );

        let text = match self.make_nws_request::<PointsResponse>(&points_url).await {
            Ok(points) => {
                let outcome = self
                    .make_nws_request::<ForecastResponse>(&points.properties.forecast)
                    .await;
                format_forecast(outcome)
            }
            Err(e) => {
                tracing::warn!("Point metadata fetch failed: {}", e);
                FORECAST_POINTS_UNAVAILABLE.to_string()
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets current conditions plus a 12-hour hourly forecast for a city
    #[tool(description = "Get hourly weather forecast with current conditions for a location. Provide a free-text location such as a city name (e.g., 'Berlin' or 'New York').")]
    async fn get_hourly_weather(
        &self,
        Parameters(request): Parameters<GetHourlyWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting hourly weather for location: {}", request.location);

        let result = self
            .accuweather
            .fetch_hourly(&self.cache, &request.location)
            .await
            .map_err(|e| match e {
                WeatherError::LocationNotFound(_) => McpError::invalid_params(e.to_string(), None),
                other => McpError::internal_error(
                    format!("Failed to fetch hourly weather: {}", other),
                    None,
                ),
            })?;

        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize result: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}
