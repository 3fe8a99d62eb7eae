//! Single-route proxy gateway.
//!
//! `GET /weather?location=<string>` relays the upstream forecast
//! document unchanged. Client input errors map to 400 and upstream
//! failures to 500, both with a JSON error payload; upstream
//! diagnostics stay in the server log.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

use crate::config::GatewayConfig;
use crate::upstream::{ForecastProvider, WeatherApiProvider};

/// Errors surfaced to gateway clients.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Location query parameter is required.")]
    MissingParameter,

    #[error("Failed to fetch weather data.")]
    Upstream,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::MissingParameter => StatusCode::BAD_REQUEST,
            GatewayError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<dyn ForecastProvider>,
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    location: Option<String>,
}

/// Build the gateway router over any forecast provider.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(state)
}

async fn get_weather(
    State(state): State<GatewayState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, GatewayError> {
    let location = params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|location| !location.is_empty())
        .ok_or(GatewayError::MissingParameter)?;

    let upstream = state.provider.fetch_forecast(location).await.map_err(|e| {
        tracing::error!("Error fetching weather data: {}", e);
        GatewayError::Upstream
    })?;

    Ok(([(header::CONTENT_TYPE, upstream.content_type)], upstream.body).into_response())
}

/// Run the gateway until the process is stopped.
pub async fn run(config: GatewayConfig) -> anyhow::Result<()> {
    let provider = WeatherApiProvider::new(&config.upstream_url, &config.api_key)?;
    let state = GatewayState {
        provider: Arc::new(provider),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Gateway running on port {}", config.listen_port);
    axum::serve(listener, app).await?;

    Ok(())
}
