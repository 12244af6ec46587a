/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-weather/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// AccuWeather API base URL
pub const ACCUWEATHER_API_BASE: &str = "http://dataservice.accuweather.com";

/// Per-request timeout for NWS calls, in seconds
pub const NWS_REQUEST_TIMEOUT_SECS: u64 = 30;
