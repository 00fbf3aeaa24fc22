use reqwest::StatusCode;
use thiserror::Error;

/// Why a request to the weather service produced no usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to {url} failed with status: {status}")]
    Status { status: StatusCode, url: String },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that escape a tool call instead of becoming a fixed message.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("unexpected {resource} response shape: {source}")]
    UnexpectedShape {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_status() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://api.weather.gov/points/0,0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/points/0,0"));
    }

    #[test]
    fn shape_error_names_resource() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = WeatherError::UnexpectedShape {
            resource: "forecast",
            source,
        };
        assert!(err.to_string().starts_with("unexpected forecast response shape"));
    }
}
