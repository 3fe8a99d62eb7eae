//! Upstream forecast provider.
//!
//! The gateway reaches the third-party weather API through the
//! [`ForecastProvider`] trait, so request handling can be tested
//! against a substitute provider.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Upstream failure as seen by the gateway.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Upstream request failed: {0}")]
    Request(String),

    #[error("Upstream returned status {0}")]
    Status(u16),
}

/// Raw upstream response, relayed to the client untouched.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Forecast endpoint the gateway queries.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast document for a location query.
    async fn fetch_forecast(&self, location: &str) -> Result<ProviderResponse, ProviderError>;
}

/// `WeatherAPI`-backed provider.
pub struct WeatherApiProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WeatherApiProvider {
    /// Create a provider for `endpoint`, authenticating with `api_key`.
    pub fn new(endpoint: &str, api_key: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("SkyCast/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }

    // The credential is the last query parameter so redacted logging
    // can cut the URL at "key=".
    fn request_url(&self, location: &str) -> String {
        format!(
            "{}?q={}&hours=24&key={}",
            self.endpoint,
            urlencoding::encode(location),
            self.api_key
        )
    }
}

/// Strip the credential from an upstream URL for logging.
fn redact(url: &str) -> &str {
    url.split("key=").next().unwrap_or(url)
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn fetch_forecast(&self, location: &str) -> Result<ProviderResponse, ProviderError> {
        let url = self.request_url(location);
        debug!("Calling upstream {}", redact(&url));

        // reqwest errors embed the full request URL, credential included;
        // drop the URL before the message can reach a log line.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/xml")
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?
            .to_vec();

        Ok(ProviderResponse { body, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_places_credential_last() {
        let provider =
            WeatherApiProvider::new("http://api.weatherapi.com/v1/forecast.xml", "secret123")
                .unwrap();
        assert_eq!(
            provider.request_url("New York"),
            "http://api.weatherapi.com/v1/forecast.xml?q=New%20York&hours=24&key=secret123"
        );
    }

    #[test]
    fn test_redact_strips_credential() {
        let url = "http://api.weatherapi.com/v1/forecast.xml?q=London&hours=24&key=secret123";
        let redacted = redact(url);
        assert!(!redacted.contains("secret123"));
        assert!(redacted.contains("q=London"));
    }
}
