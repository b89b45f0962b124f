//! UptimeRobot Rust client
//!
//! Typed access to the UptimeRobot v2 monitor API. Each call becomes one
//! form-encoded POST and the JSON reply is decoded into typed results.
//!
//! # Quick Start
//!
//! ```no_run
//! use uptimerobot_rs::{ClientConfig, UptimeRobotClient};
//! use uptimerobot_rs::monitors::models::{Monitor, MonitorType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Load your API key (UPTIMEROBOT_API_KEY)
//! let config = ClientConfig::from_env()?;
//!
//! // 2. Create a client
//! let client = UptimeRobotClient::new_with_config(config);
//!
//! // 3. Create a monitor; its id is filled in on success
//! let mut monitor = Monitor::new("homepage", "https://example.com", MonitorType::Http);
//! client.create_monitor(&mut monitor).await?;
//!
//! let monitors = client.list_monitors(&[monitor.id]).await?;
//! println!("Found {} monitors", monitors.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`UptimeRobotClient`] - Client with all API endpoint methods
//! - [`ClientConfig`] - Base URL, API key and User-Agent
//! - [`UptimeRobotError`] - Everything a call can fail with
//!
//! # API Endpoint Modules
//!
//! - [`monitors`] - List, create, edit and delete monitors


// Core modules
pub mod client;         // Main HTTP client
pub mod config;         // Connection settings and env loading
pub mod errors;         // Error types
pub(crate) mod helpers; // Form building and the shared POST path


// API endpoint modules
pub mod monitors;       // Monitor management


// Re-exports for convenient access
pub use client::UptimeRobotClient;
pub use config::ClientConfig;
pub use errors::UptimeRobotError;
