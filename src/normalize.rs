use crate::models::{
    CurrentConditions, CurrentConditionsReport, CurrentObservation, HourlyForecastPoint,
    HourlyPeriod, HourlyWeatherResult, ResolvedLocation,
};

/// Maps the raw AccuWeather payloads into one flat result.
///
/// Pure mapping, no I/O. The hourly sequence keeps upstream order; the element
/// at 0-based position i becomes the point at relative offset i + 1 hours. An
/// empty current-conditions array (which is also what a failed fetch degrades
/// to) yields the unavailable marker rather than an error.
pub fn normalize(
    current_raw: Vec<CurrentObservation>,
    hourly_raw: Vec<HourlyPeriod>,
    resolved: &ResolvedLocation,
) -> HourlyWeatherResult {
    let current_conditions = match current_raw.into_iter().next() {
        Some(obs) => CurrentConditions::Available(CurrentConditionsReport {
            temperature_value: obs.temperature.metric.value,
            temperature_unit: obs.temperature.metric.unit,
            weather_text: obs.weather_text,
            relative_humidity: obs.relative_humidity,
            has_precipitation: obs.has_precipitation,
            observation_time: obs.observation_time,
        }),
        None => CurrentConditions::unavailable(),
    };

    let hourly_forecast = hourly_raw
        .into_iter()
        .enumerate()
        .map(|(i, hour)| HourlyForecastPoint {
            relative_offset_hours: i as u32 + 1,
            temperature_value: hour.temperature.value,
            temperature_unit: hour.temperature.unit,
            weather_text: hour.icon_phrase,
            precipitation_probability: hour.precipitation_probability,
            precipitation_type: hour.precipitation_type,
            precipitation_intensity: hour.precipitation_intensity,
        })
        .collect();

    HourlyWeatherResult {
        location: resolved.localized_name.clone(),
        location_key: resolved.key.clone(),
        country: resolved.country.clone(),
        current_conditions,
        hourly_forecast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricTemperature, UnitValue};

    fn resolved() -> ResolvedLocation {
        ResolvedLocation {
            key: "178087".to_string(),
            localized_name: "Berlin".to_string(),
            country: "Germany".to_string(),
        }
    }

    fn hour(temp: f64) -> HourlyPeriod {
        HourlyPeriod {
            temperature: UnitValue {
                value: temp,
                unit: "C".to_string(),
            },
            icon_phrase: "Cloudy".to_string(),
            precipitation_probability: 20.0,
            precipitation_type: None,
            precipitation_intensity: None,
        }
    }

    fn observation() -> CurrentObservation {
        CurrentObservation {
            temperature: MetricTemperature {
                metric: UnitValue {
                    value: 18.5,
                    unit: "C".to_string(),
                },
            },
            weather_text: "Partly sunny".to_string(),
            relative_humidity: Some(65.0),
            has_precipitation: false,
            observation_time: "2026-08-29T10:00:00+02:00".to_string(),
        }
    }

    #[test]
    fn hourly_offsets_count_from_one_in_upstream_order() {
        let hours: Vec<_> = (0..12).map(|i| hour(10.0 + i as f64)).collect();

        let result = normalize(vec![observation()], hours, &resolved());

        assert_eq!(result.hourly_forecast.len(), 12);
        for (i, point) in result.hourly_forecast.iter().enumerate() {
            assert_eq!(point.relative_offset_hours, i as u32 + 1);
            assert_eq!(point.temperature_value, 10.0 + i as f64);
        }
    }

    #[test]
    fn empty_current_conditions_degrade_to_unavailable() {
        let result = normalize(vec![], vec![hour(12.0)], &resolved());

        assert_eq!(result.current_conditions, CurrentConditions::unavailable());
        assert_eq!(result.location, "Berlin");
        assert_eq!(result.location_key, "178087");
        assert_eq!(result.country, "Germany");
        assert_eq!(result.hourly_forecast.len(), 1);
    }

    #[test]
    fn first_observation_wins_and_maps_all_fields() {
        let result = normalize(vec![observation()], vec![], &resolved());

        let CurrentConditions::Available(report) = result.current_conditions else {
            panic!("expected available current conditions");
        };
        assert_eq!(report.temperature_value, 18.5);
        assert_eq!(report.temperature_unit, "C");
        assert_eq!(report.weather_text, "Partly sunny");
        assert_eq!(report.relative_humidity, Some(65.0));
        assert!(!report.has_precipitation);
        assert_eq!(report.observation_time, "2026-08-29T10:00:00+02:00");
    }

    #[test]
    fn unavailable_marker_serializes_as_plain_string() {
        let result = normalize(vec![], vec![], &resolved());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json["current_conditions"],
            serde_json::json!("No current conditions available")
        );
    }
}
