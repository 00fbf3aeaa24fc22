use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    redirect::Policy,
    Client,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

use crate::constants::{GEO_JSON, NWS_API_BASE, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::FetchError;

/// HTTP access to the National Weather Service API
#[derive(Clone, Debug)]
pub struct NwsClient {
    client: Arc<Client>,
    base_url: String,
}

impl NwsClient {
    /// Creates a client for the public NWS endpoint
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(NWS_API_BASE)
    }

    /// Creates a client rooted at `base_url` instead of the public endpoint
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::build(base_url.into(), REQUEST_TIMEOUT)
    }

    fn build(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        // No idle pool: each call opens its own connection and drops it when done.
        // Redirects are not followed, so a 3xx surfaces as a status error.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .redirect(Policy::none())
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn alerts_url(&self, region_code: &str) -> String {
        format!("{}/alerts/active/area/{}", self.base_url, region_code)
    }

    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.base_url, latitude, longitude)
    }

    /// Makes an HTTP GET request and parses the body as generic JSON.
    ///
    /// Any non-2xx status is an error, as is a body that is not JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| classify(e, url))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn classify(err: reqwest::Error, url: &str) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport(err)
    }
}
