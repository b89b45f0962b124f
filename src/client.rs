use crate::config::ClientConfig;
use crate::errors::UptimeRobotError;
use crate::helpers::{self, FormParams};
use reqwest::Client;


/// Main client for interacting with the UptimeRobot API.
///
/// Holds the immutable [`ClientConfig`] and a reusable `reqwest::Client`.
/// Cloning is cheap and clones share the connection pool, so one client can be
/// handed to many tasks issuing calls in parallel.
///
/// # Available Endpoints
///
/// - [`list_monitors`](UptimeRobotClient::list_monitors) - Monitors by id (or all)
/// - [`list_monitors_page`](UptimeRobotClient::list_monitors_page) - Monitors plus pagination
/// - [`create_monitor`](UptimeRobotClient::create_monitor) - Create a monitor and learn its id
/// - [`edit_monitor`](UptimeRobotClient::edit_monitor) - Update an existing monitor
/// - [`delete_monitor`](UptimeRobotClient::delete_monitor) - Remove a monitor
///
/// # Example
/// ```no_run
/// use uptimerobot_rs::UptimeRobotClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = UptimeRobotClient::new("u1234567-abcdef");
/// let monitors = client.list_monitors(&[]).await?;
/// println!("{} monitors", monitors.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UptimeRobotClient {
    pub(crate) http_client: Client,
    pub(crate) config: ClientConfig,
}


impl UptimeRobotClient {
    /// Create a client for the production API with default settings
    pub fn new(api_key: impl Into<String>) -> UptimeRobotClient {
        UptimeRobotClient::new_with_config(ClientConfig::new(api_key))
    }


    /// Create a client from an explicit configuration
    /// Useful for testing against a stub server
    pub fn new_with_config(config: ClientConfig) -> UptimeRobotClient {
        UptimeRobotClient::with_http_client(config, Client::new())
    }


    /// Create a client that sends through a caller-built `reqwest::Client`,
    /// e.g. one with timeouts or a proxy configured.
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> UptimeRobotClient {
        UptimeRobotClient { http_client, config }
    }


    pub fn config(&self) -> &ClientConfig {
        &self.config
    }


    /// Wrapper for the form-encoded POST every endpoint uses
    pub(crate) async fn post_form(
        &self,
        path: &str,
        form: FormParams,
    ) -> Result<String, UptimeRobotError> {
        helpers::post_form(&self.http_client, &self.config, path, form).await
    }
}
