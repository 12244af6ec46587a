use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub accuweather_api_key: String,
    pub cache_path: PathBuf,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// A missing `ACCUWEATHER_API_KEY` is tolerated so the NWS tools keep
    /// working; the hourly tool will fail upstream until a key is provided.
    pub fn from_env() -> Self {
        let accuweather_api_key = env::var("ACCUWEATHER_API_KEY").unwrap_or_default();
        if accuweather_api_key.is_empty() {
            tracing::warn!(
                "ACCUWEATHER_API_KEY is not set; get_hourly_weather will fail until it is"
            );
        }

        Self {
            accuweather_api_key,
            cache_path: default_cache_path(),
        }
    }
}

/// Location cache file under the per-user cache directory, e.g.
/// `~/.cache/weather/location_cache.json` on Linux.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("weather")
        .join("location_cache.json")
}
