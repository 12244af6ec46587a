pub mod accuweather;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod service;

pub use accuweather::AccuWeatherClient;
pub use cache::LocationCache;
pub use config::Config;
pub use error::WeatherError;
pub use service::Weather;
