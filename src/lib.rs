//! `SkyCast` - Weather display client with a single-route forecast proxy
//!
//! This library provides the core functionality for fetching hourly
//! forecasts through the gateway, classifying condition text, and
//! rendering the terminal weather display.

pub mod condition;
pub mod config;
pub mod display;
pub mod gateway;
pub mod models;
pub mod pipeline;
pub mod upstream;

// Re-export core types for public API
pub use condition::Condition;
pub use config::{ClientConfig, GatewayConfig};
pub use display::{DisplayState, ForecastController, ForecastView};
pub use gateway::{GatewayError, GatewayState};
pub use models::ForecastDocument;
pub use pipeline::{GatewayClient, PipelineError};
pub use upstream::{ForecastProvider, WeatherApiProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
