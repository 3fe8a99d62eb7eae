//! Configuration for the gateway and the display client.
//!
//! Both processes are configured entirely through environment
//! variables; there is no config file.

use anyhow::{Context, Result, bail};
use std::env;

/// Upstream forecast endpoint queried by the gateway.
pub const DEFAULT_UPSTREAM_URL: &str = "http://api.weatherapi.com/v1/forecast.xml";

/// Port the gateway binds when `PORT` is unset.
pub const DEFAULT_LISTEN_PORT: u16 = 5000;

/// Location the client queries on startup when none is configured.
pub const DEFAULT_QUERY: &str = "London";

/// Settings for the proxy gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to bind on all interfaces
    pub listen_port: u16,
    /// Upstream forecast endpoint
    pub upstream_url: String,
    /// Credential forwarded to the upstream API
    pub api_key: String,
}

impl GatewayConfig {
    /// Read gateway settings from the environment.
    ///
    /// `WEATHER_API_KEY` is required. `PORT` and `WEATHER_API_URL` fall
    /// back to defaults when unset.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("WEATHER_API_KEY").context("Missing WEATHER_API_KEY env var")?;
        if api_key.trim().is_empty() {
            bail!("WEATHER_API_KEY env var is empty");
        }

        let listen_port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value '{raw}'"))?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        let upstream_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        Ok(Self {
            listen_port,
            upstream_url,
            api_key,
        })
    }
}

/// Settings for the display client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway, e.g. `http://localhost:5000`
    pub gateway_url: String,
    /// Location queried on startup
    pub default_query: String,
}

impl ClientConfig {
    /// Read client settings from the environment.
    pub fn from_env() -> Result<Self> {
        let gateway_url =
            env::var("SKYCAST_GATEWAY_URL").context("Missing SKYCAST_GATEWAY_URL env var")?;
        let default_query =
            env::var("SKYCAST_DEFAULT_LOCATION").unwrap_or_else(|_| DEFAULT_QUERY.to_string());

        Ok(Self {
            gateway_url,
            default_query,
        })
    }
}
