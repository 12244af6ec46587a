use anyhow::Result;

use crate::models::{AlertFeature, AlertResponse, ForecastResponse};

/// Sentinel for a successful alert fetch with zero active alerts
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";

/// Sentinel for a failed or shape-mismatched alert fetch
pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";

/// Sentinel for a failed point-metadata fetch (first forecast hop)
pub const FORECAST_POINTS_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";

/// Sentinel for a failed forecast-periods fetch (second forecast hop)
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";

/// Number of forecast periods shown by the forecast tool
const FORECAST_PERIOD_LIMIT: usize = 5;

const SECTION_DELIMITER: &str = "\n---\n";

/// Formats an alert fetch outcome into user-facing text.
///
/// This is the single place where an NWS alert failure turns into a sentinel;
/// the fetch layer reports failure as `Err` and never as text.
pub fn format_alerts(outcome: Result<AlertResponse>) -> String {
    let alerts = match outcome {
        Ok(alerts) => alerts,
        Err(e) => {
            tracing::warn!("Alert fetch failed: {}", e);
            return ALERTS_UNAVAILABLE.to_string();
        }
    };

    if alerts.features.is_empty() {
        return NO_ACTIVE_ALERTS.to_string();
    }

    alerts
        .features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(SECTION_DELIMITER)
}

fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event.as_deref().unwrap_or("Unknown"),
        props.area_desc.as_deref().unwrap_or("Unknown"),
        props.severity.as_deref().unwrap_or("Unknown"),
        props
            .description
            .as_deref()
            .unwrap_or("No description available"),
        props
            .instruction
            .as_deref()
            .unwrap_or("No specific instructions provided"),
    )
}

/// Formats a forecast-periods fetch outcome into user-facing text, keeping
/// the first five periods in upstream order.
pub fn format_forecast(outcome: Result<ForecastResponse>) -> String {
    let forecast = match outcome {
        Ok(forecast) => forecast,
        Err(e) => {
            tracing::warn!("Forecast fetch failed: {}", e);
            return FORECAST_UNAVAILABLE.to_string();
        }
    };

    forecast
        .properties
        .periods
        .iter()
        .take(FORECAST_PERIOD_LIMIT)
        .map(|period| {
            format!(
                "{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}",
                period.name,
                period.temperature,
                period.temperature_unit,
                period.wind_speed,
                period.wind_direction,
                period.detailed_forecast,
            )
        })
        .collect::<Vec<_>>()
        .join(SECTION_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertProperties, ForecastPeriod, ForecastProperties};
    use anyhow::anyhow;

    fn period(name: &str) -> ForecastPeriod {
        ForecastPeriod {
            name: name.to_string(),
            temperature: 72,
            temperature_unit: "F".to_string(),
            wind_speed: "10 mph".to_string(),
            wind_direction: "NW".to_string(),
            detailed_forecast: "Sunny and pleasant.".to_string(),
        }
    }

    #[test]
    fn zero_features_yields_no_alerts_sentinel() {
        let response = AlertResponse { features: vec![] };
        assert_eq!(format_alerts(Ok(response)), NO_ACTIVE_ALERTS);
    }

    #[test]
    fn fetch_failure_yields_unavailable_sentinel() {
        assert_eq!(format_alerts(Err(anyhow!("boom"))), ALERTS_UNAVAILABLE);
    }

    #[test]
    fn response_missing_features_key_fails_deserialization() {
        // A shape mismatch surfaces as Err at the fetch layer and therefore
        // as the unavailable sentinel here.
        let parsed = serde_json::from_value::<AlertResponse>(serde_json::json!({}));
        assert!(parsed.is_err());
    }

    #[test]
    fn alerts_use_field_fallbacks_and_delimiter() {
        let response = AlertResponse {
            features: vec![
                AlertFeature {
                    properties: AlertProperties {
                        event: Some("Tornado Warning".to_string()),
                        area_desc: Some("Dallas County".to_string()),
                        severity: Some("Extreme".to_string()),
                        description: None,
                        instruction: None,
                    },
                },
                AlertFeature {
                    properties: AlertProperties::default(),
                },
            ],
        };

        let text = format_alerts(Ok(response));
        assert!(text.contains("Event: Tornado Warning"));
        assert!(text.contains("Description: No description available"));
        assert!(text.contains("Instructions: No specific instructions provided"));
        assert!(text.contains("Event: Unknown"));
        assert_eq!(text.matches("\n---\n").count(), 1);
    }

    #[test]
    fn forecast_truncates_to_five_periods_in_order() {
        let names = ["Tonight", "Monday", "Monday Night", "Tuesday", "Tuesday Night", "Wednesday", "Wednesday Night"];
        let response = ForecastResponse {
            properties: ForecastProperties {
                periods: names.iter().map(|n| period(n)).collect(),
            },
        };

        let text = format_forecast(Ok(response));
        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 5);
        for (block, name) in blocks.iter().zip(&names[..5]) {
            assert!(block.starts_with(&format!("{}:", name)));
        }
        assert!(!text.contains("Wednesday:"));
    }

    #[test]
    fn forecast_fetch_failure_yields_sentinel() {
        assert_eq!(format_forecast(Err(anyhow!("boom"))), FORECAST_UNAVAILABLE);
    }
}
