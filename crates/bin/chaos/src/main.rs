//! # procgate-chaos
//!
//! Drives a running procgate server through its documented error answers
//! and reports what came back. Every scenario is supposed to fail; a
//! scenario that succeeds is the anomaly.
//!
//! Configuration comes from the environment:
//! - `PROCGATE_API_URL` — base URL of the server (default `http://127.0.0.1:8080`)
//! - `PROCGATE_API_TOKEN` — bearer token (default empty, for open servers)
//! - `PROCGATE_PROFILE_*` — optional profile fields for telemetry enrichment
//!
//! Usage: `procgate-chaos [scenario]` — one scenario by name, or all of
//! them when none is given.

use anyhow::Context;

use procgate_client::chaos::{ChaosRunner, Scenario};
use procgate_client::customers::CustomerClient;
use procgate_client::http::{ApiClient, StaticTokenProvider};
use procgate_client::profile::{EnvProfileSource, ProfileService};
use procgate_client::telemetry::TracingTelemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let scenarios = match std::env::args().nth(1) {
        Some(name) => vec![
            name.parse::<Scenario>()
                .with_context(|| format!("unusable scenario argument `{name}`"))?,
        ],
        None => Scenario::ALL.to_vec(),
    };

    let base_url =
        std::env::var("PROCGATE_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_owned());
    let token = std::env::var("PROCGATE_API_TOKEN").unwrap_or_default();

    let profile = ProfileService::new(EnvProfileSource)
        .current_user()
        .await
        .context("profile lookup failed")?;

    let customers = CustomerClient::new(ApiClient::new(
        base_url.clone(),
        StaticTokenProvider::new(token),
    ));
    let runner = ChaosRunner::new(customers, TracingTelemetry, profile.telemetry_properties());

    tracing::info!(url = %base_url, count = scenarios.len(), "running chaos scenarios");

    let mut unexpected = 0_usize;
    for scenario in scenarios {
        let report = runner.run(scenario).await;
        match report.error {
            Some(error) => println!("{scenario}: captured `{error}`"),
            None => {
                unexpected += 1;
                println!("{scenario}: unexpectedly succeeded");
            }
        }
    }

    if unexpected > 0 {
        anyhow::bail!("{unexpected} scenario(s) did not fail as designed");
    }
    Ok(())
}
