use std::env;

use anyhow::{Context, Result, bail};
use futures::{StreamExt, stream::FuturesUnordered};
use tokio::io::{AsyncBufReadExt, BufReader};

use skycast::config::{ClientConfig, GatewayConfig};
use skycast::display::{DisplayState, ForecastController, ForecastView, render};
use skycast::gateway;
use skycast::pipeline::{GatewayClient, PipelineError};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("serve") => {
            let config = GatewayConfig::from_env()?;
            gateway::run(config).await
        }
        Some("show") => {
            let location = args[2..].join(" ");
            if location.trim().is_empty() {
                bail!("Usage: skycast show <location>");
            }
            let config = ClientConfig::from_env()?;
            show_once(&config, &location).await
        }
        None => {
            let config = ClientConfig::from_env()?;
            interactive(&config).await
        }
        Some(other) => {
            bail!("Unknown command '{other}'. Usage: skycast [serve | show <location>]")
        }
    }
}

/// Fetch one location, print the rendered view, exit.
///
/// Failures propagate so the process exits non-zero.
async fn show_once(config: &ClientConfig, location: &str) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url)?;
    let view = client
        .fetch_and_classify(location)
        .await
        .with_context(|| format!("Query for '{location}' failed"))?;
    println!("{}", render(&DisplayState::Ready(view)));

    Ok(())
}

/// Read location queries from stdin, one per line.
///
/// In-flight fetches are not cancelled by a newer query; outcomes are
/// applied as they resolve and the last one wins.
async fn interactive(config: &ClientConfig) -> Result<()> {
    let client = GatewayClient::new(&config.gateway_url)?;
    let mut controller = ForecastController::new();
    let mut in_flight = FuturesUnordered::new();

    println!("Enter a location and press return (Ctrl-D to quit).");

    controller.begin_query();
    in_flight.push(fetch(client.clone(), config.default_query.clone()));
    println!("{}", render(controller.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read from stdin")? {
                    Some(input) => {
                        let query = input.trim();
                        if query.is_empty() {
                            continue;
                        }
                        controller.begin_query();
                        in_flight.push(fetch(client.clone(), query.to_string()));
                        println!("{}", render(controller.state()));
                    }
                    None => break,
                }
            }
            Some(outcome) = in_flight.next() => {
                controller.apply(outcome);
                println!("{}", render(controller.state()));
            }
        }
    }

    Ok(())
}

// A single named constructor so every in-flight fetch has the same
// future type.
fn fetch(
    client: GatewayClient,
    location: String,
) -> impl Future<Output = Result<ForecastView, PipelineError>> {
    async move { client.fetch_and_classify(&location).await }
}
