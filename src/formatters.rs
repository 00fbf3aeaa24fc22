use crate::constants::{
    BLOCK_SEPARATOR, MAX_FORECAST_PERIODS, NO_DESCRIPTION, NO_INSTRUCTION, UNKNOWN,
};
use crate::models::{AlertFeature, AlertProperties, ForecastPeriod};

/// Formats a single alert, substituting placeholders for missing fields
pub fn format_alert(props: &AlertProperties) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstruction: {}",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props.description.as_deref().unwrap_or(NO_DESCRIPTION),
        props.instruction.as_deref().unwrap_or(NO_INSTRUCTION),
    )
}

/// Formats weather alerts into a human-readable string, in provider order
pub fn format_alerts(features: &[AlertFeature]) -> String {
    let empty = AlertProperties::default();
    features
        .iter()
        .map(|feature| format_alert(feature.properties.as_ref().unwrap_or(&empty)))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Formats a single forecast period
pub fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "Name: {}\nTemperature: {} {}\nWind: {} {}\nShort Forecast: {}\nDetailed Forecast: {}",
        period.name,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction,
        period.short_forecast,
        period.detailed_forecast
    )
}

/// Formats NWS forecast periods into a human-readable string.
///
/// Only the first [`MAX_FORECAST_PERIODS`] periods are rendered.
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(MAX_FORECAST_PERIODS)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn period(name: &str) -> ForecastPeriod {
        serde_json::from_value(json!({
            "name": name,
            "temperature": 72,
            "temperatureUnit": "F",
            "windSpeed": "5 to 10 mph",
            "windDirection": "SW",
            "shortForecast": "Sunny",
            "detailedForecast": "Sunny, with a high near 72."
        }))
        .unwrap()
    }

    #[test]
    fn alert_with_only_event_uses_placeholders() {
        let props = AlertProperties {
            event: Some("Flood Watch".into()),
            ..Default::default()
        };
        assert_eq!(
            format_alert(&props),
            "Event: Flood Watch\n\
             Area: Unknown\n\
             Severity: Unknown\n\
             Description: No description available\n\
             Instruction: No specific instructions"
        );
    }

    #[test]
    fn alert_without_properties_renders_all_placeholders() {
        let features = vec![AlertFeature { properties: None }];
        let out = format_alerts(&features);
        assert!(out.starts_with("Event: Unknown\nArea: Unknown"));
    }

    #[test]
    fn alerts_keep_input_order() {
        let features: Vec<AlertFeature> = ["Heat Advisory", "Wind Advisory", "Frost Advisory"]
            .iter()
            .map(|event| {
                serde_json::from_value(json!({"properties": {"event": event}})).unwrap()
            })
            .collect();

        let out = format_alerts(&features);
        let blocks: Vec<&str> = out.split(BLOCK_SEPARATOR).collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("Event: Heat Advisory"));
        assert!(blocks[1].starts_with("Event: Wind Advisory"));
        assert!(blocks[2].starts_with("Event: Frost Advisory"));
    }

    #[test]
    fn period_renders_every_field() {
        assert_eq!(
            format_period(&period("Tonight")),
            "Name: Tonight\n\
             Temperature: 72 F\n\
             Wind: 5 to 10 mph SW\n\
             Short Forecast: Sunny\n\
             Detailed Forecast: Sunny, with a high near 72."
        );
    }

    #[test]
    fn forecast_is_capped_at_first_periods() {
        let periods: Vec<ForecastPeriod> = (0..30).map(|i| period(&format!("P{i}"))).collect();
        let out = format_forecast(&periods);
        let blocks: Vec<&str> = out.split(BLOCK_SEPARATOR).collect();
        assert_eq!(blocks.len(), MAX_FORECAST_PERIODS);
        assert!(blocks[0].starts_with("Name: P0\n"));
        assert!(blocks[23].starts_with("Name: P23\n"));
        assert!(!out.contains("Name: P24\n"));
    }
}
