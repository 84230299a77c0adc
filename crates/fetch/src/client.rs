//! JSON fetcher.
//!
//! `JsonFetcher` performs the transport call, decodes the body into an
//! unknown [`Value`], and hands it to a caller-supplied conversion. Every
//! failure comes back as a [`FetchError`]; nothing escapes as a panic.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{ConfigError, FetchError};

/// Client that fetches JSON and narrows it with a conversion function.
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    /// Configuration for the fetcher.
    config: Arc<FetchConfig>,
    /// HTTP client built from the configuration.
    http_client: reqwest::Client,
}

impl JsonFetcher {
    /// Create a fetcher with default configuration.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(config: FetchConfig) -> Result<Self, ConfigError> {
        let headers = default_headers(&config)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::client_build(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// The configuration this fetcher was built with.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url`, decode the body as JSON, and convert it.
    ///
    /// A non-success status becomes [`FetchError::Status`]. The conversion's
    /// own error is returned as [`FetchError::Conversion`] unchanged.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// use narrow_core::unknown_to_object;
    /// use narrow_fetch::JsonFetcher;
    ///
    /// let fetcher = JsonFetcher::new()?;
    /// let keys = fetcher
    ///     .fetch_json("https://api.github.com/rate_limit", |value| {
    ///         unknown_to_object(value).map(|object| object.len())
    ///     })
    ///     .await?;
    /// ```
    pub async fn fetch_json<D, E, F>(
        &self,
        url: &str,
        try_from_unknown: F,
    ) -> Result<D, FetchError<E>>
    where
        F: FnOnce(&Value) -> Result<D, E>,
    {
        let url = Url::parse(url).map_err(|e| FetchError::invalid_url(url, e.to_string()))?;
        info!(url = %url, "Fetching JSON");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Request failed");
                FetchError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Non-success response");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::decode(e.to_string()))?;
        debug!(url = %url, "Decoded response body");

        try_from_unknown(&body).map_err(FetchError::Conversion)
    }
}

fn default_headers(config: &FetchConfig) -> Result<HeaderMap, ConfigError> {
    config
        .headers
        .iter()
        .try_fold(HeaderMap::new(), |mut headers, (name, value)| {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            headers.insert(header_name, header_value);
            Ok::<_, ConfigError>(headers)
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use narrow_core::{ConversionError, unknown_to_number, unknown_to_object};
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn limit_of(value: &Value) -> Result<f64, ConversionError> {
        let object = unknown_to_object(value)?;
        unknown_to_number(object.get("limit"))
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let config = FetchConfig::default().header("bad header", "x");
        let result = JsonFetcher::with_config(config);
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[tokio::test]
    async fn test_fetch_json_success() -> Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": 60
            })))
            .mount(&mock_server)
            .await;

        let fetcher =
            JsonFetcher::with_config(FetchConfig::default().header("Accept", "application/json"))?;
        let url = format!("{}/rate_limit", mock_server.uri());

        let limit = fetcher.fetch_json(&url, limit_of).await?;
        assert!((limit - 60.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rate_limit_wrong"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = JsonFetcher::new()?;
        let url = format!("{}/rate_limit_wrong", mock_server.uri());

        let result = fetcher.fetch_json(&url, limit_of).await;
        assert!(matches!(result, Err(FetchError::Status(404))));
        if let Err(error) = result {
            assert_eq!(error.to_string(), "Response status: 404");
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_conversion_error_passes_through()
    -> Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": "sixty"
            })))
            .mount(&mock_server)
            .await;

        let fetcher = JsonFetcher::new()?;
        let result = fetcher.fetch_json(&mock_server.uri(), limit_of).await;

        let error = result.err().and_then(|e| e.as_conversion().cloned());
        assert_eq!(
            error.map(|e| e.to_string()).as_deref(),
            Some("Error unknownToNumber typeof value is string")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_body() -> Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let fetcher = JsonFetcher::new()?;
        let result = fetcher.fetch_json(&mock_server.uri(), limit_of).await;
        assert!(matches!(result, Err(FetchError::Decode { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "limit": 1 }))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&mock_server)
            .await;

        let config = FetchConfig::default().timeout(Duration::from_millis(100));
        let fetcher = JsonFetcher::with_config(config)?;
        assert_eq!(fetcher.config().timeout, Duration::from_millis(100));
        let result = fetcher.fetch_json(&mock_server.uri(), limit_of).await;
        assert!(matches!(result, Err(FetchError::Transport { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_url() -> Result<(), Box<dyn std::error::Error>> {
        let fetcher = JsonFetcher::new()?;
        let result = fetcher.fetch_json("not a url", limit_of).await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
        Ok(())
    }
}
