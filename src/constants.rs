use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-mcp/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type requested from every NWS endpoint
pub const GEO_JSON: &str = "application/geo+json";

/// Total timeout for a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of forecast periods rendered
pub const MAX_FORECAST_PERIODS: usize = 24;

/// Separator placed between rendered alerts or periods
pub const BLOCK_SEPARATOR: &str = "\n---\n";

/// Alerts request failed or returned no feature collection
pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";

/// Alerts request succeeded with an empty feature collection
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";

/// Points lookup for a coordinate failed
pub const POINTS_UNAVAILABLE: &str = "Unable to retrieve forecast data for this location.";

/// Forecast lookup behind a points response failed
pub const FORECAST_UNAVAILABLE: &str =
    "Unable to retrieve detailed forecast data for this location.";

/// Placeholder for a missing alert event, area or severity
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing alert description
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder for missing alert instructions
pub const NO_INSTRUCTION: &str = "No specific instructions";
