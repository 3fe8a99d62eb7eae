//! Client-side forecast pipeline.
//!
//! Fetches forecast documents through the gateway, deserializes the
//! XML body, and projects it into the display view.

use anyhow::Context;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::display::ForecastView;
use crate::models::ForecastDocument;

/// Failure modes of a single query attempt.
///
/// Every failure is terminal for that attempt; recovery is a new
/// user-initiated query.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("XML parse error: {0}")]
    Parse(String),
}

/// HTTP client for the forecast gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the gateway at `base_url`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("SkyCast/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the forecast document for a location.
    ///
    /// Transport failures and gateway error statuses map to
    /// [`PipelineError::Fetch`], undeserializable bodies to
    /// [`PipelineError::Parse`].
    pub async fn fetch_document(&self, location: &str) -> Result<ForecastDocument, PipelineError> {
        let url = format!(
            "{}/weather?location={}",
            self.base_url,
            urlencoding::encode(location)
        );
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;

        ForecastDocument::from_xml(&body)
            .map_err(|e| PipelineError::Parse(format!("Failed to parse forecast XML: {e}")))
    }

    /// Fetch a forecast and project it into the display view.
    pub async fn fetch_and_classify(&self, location: &str) -> Result<ForecastView, PipelineError> {
        let document = self.fetch_document(location).await?;
        info!(
            "Fetched forecast for {} ({} hourly records)",
            document.location.name,
            document.hours().count()
        );
        Ok(ForecastView::from_document(&document))
    }
}
