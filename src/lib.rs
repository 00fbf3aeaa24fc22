//! MCP server exposing National Weather Service alerts and forecasts.
//!
//! Two tools are served: `get_alerts` for the active alerts in a US state and
//! `get_forecast` for the multi-period forecast at a coordinate. Both return
//! plain text blocks separated by `---`.

pub mod client;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use client::NwsClient;
pub use error::{FetchError, WeatherError};
pub use service::Weather;
