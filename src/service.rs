use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::NwsClient;
use crate::constants::{
    ALERTS_UNAVAILABLE, FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS, POINTS_UNAVAILABLE,
};
use crate::error::{FetchError, WeatherError};
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{
    is_blank, AlertFeed, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    nws: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service backed by the public NWS API
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_client(NwsClient::new()?))
    }

    pub fn with_client(nws: NwsClient) -> Self {
        Self {
            nws,
            tool_router: Self::tool_router(),
        }
    }

    /// Fetches a URL, logging the failure reason before it is discarded.
    /// A blank body (null, `{}`, `[]` and the like) counts as no data.
    async fn fetch(&self, url: &str) -> Option<Value> {
        match self.nws.fetch_json(url).await {
            Ok(value) if is_blank(&value) => {
                tracing::warn!(url = %url, "empty response body");
                None
            }
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "weather request failed");
                None
            }
        }
    }

    /// Renders active alerts for a region. Never fails: transport problems and
    /// unexpected payloads collapse to a fixed message.
    pub async fn alerts(&self, region_code: &str) -> String {
        let url = self.nws.alerts_url(region_code);

        let Some(data) = self.fetch(&url).await else {
            return ALERTS_UNAVAILABLE.to_string();
        };

        match AlertFeed::from_value(&data) {
            AlertFeed::Missing => {
                tracing::warn!(url = %url, "alerts response is not a feature collection");
                ALERTS_UNAVAILABLE.to_string()
            }
            AlertFeed::Empty => NO_ACTIVE_ALERTS.to_string(),
            AlertFeed::Features(features) => format_alerts(&features),
        }
    }

    /// Renders the forecast for a coordinate.
    ///
    /// Transport failures become fixed messages; a points or forecast payload
    /// missing required fields is returned as an error.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let points_url = self.nws.points_url(latitude, longitude);

        let Some(points) = self.fetch(&points_url).await else {
            return Ok(POINTS_UNAVAILABLE.to_string());
        };
        let points: PointsResponse = decode("points", points)?;

        let Some(forecast) = self.fetch(&points.properties.forecast).await else {
            return Ok(FORECAST_UNAVAILABLE.to_string());
        };
        let forecast: ForecastResponse = decode("forecast", forecast)?;

        Ok(format_forecast(&forecast.properties.periods))
    }
}

fn decode<T: DeserializeOwned>(resource: &'static str, value: Value) -> Result<T, WeatherError> {
    serde_json::from_value(value).map_err(|source| WeatherError::UnexpectedShape { resource, source })
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather MCP server backed by the National Weather Service API. \
                Use get_alerts for active alerts in a US state and get_forecast \
                for the forecast at a latitude/longitude."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter state code (e.g. CA, NY).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for region: {}", request.region_code);

        let formatted = self.alerts(&request.region_code).await;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    #[tool(description = "Retrieve the weather forecast for the specified geographic coordinates. Provide latitude and longitude in decimal degrees (e.g. latitude: 39.7456, longitude: -97.0892).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let formatted = self
            .forecast(request.latitude, request.longitude)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "forecast failed");
                McpError::internal_error(e.to_string(), None)
            })?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
