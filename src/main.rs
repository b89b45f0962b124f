use anyhow::{Context, Result};
use dotenv::dotenv;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uptimerobot_rs::{ClientConfig, UptimeRobotClient};

/// Smoke check: list monitors with the credentials from the environment.
///
/// Usage: `uptimerobot-rs [ID...]`
#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let ids = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<u64>()
                .with_context(|| format!("monitor id must be an integer, got {arg:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = ClientConfig::from_env().context("loading client config")?;
    info!(base_url = %config.base_url(), "Using UptimeRobot API");
    let client = UptimeRobotClient::new_with_config(config);

    println!("Fetching monitors from UptimeRobot...\n");
    let monitors = client.list_monitors(&ids).await?;

    println!("Found {} monitors:\n", monitors.len());
    for (i, monitor) in monitors.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, monitor.id, monitor.friendly_name);
        println!("   URL: {}", monitor.url);
        println!("   Type: {}", monitor.monitor_type);
        match monitor.status {
            Some(status) => println!("   Status: {}", status),
            None => println!("   Status: unknown"),
        }
        println!();
    }

    Ok(())
}
