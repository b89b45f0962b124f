//! Client configuration.
//!
//! Holds everything a [`UptimeRobotClient`](crate::client::UptimeRobotClient) needs
//! besides the HTTP transport: where to send requests, which API key to send,
//! and the User-Agent to identify as.

use crate::errors::UptimeRobotError;
use std::env;
use std::fmt;
use url::Url;


// UptimeRobot v2 API base URL for production
pub const DEFAULT_BASE_URL: &str = "https://api.uptimerobot.com/v2/";
pub const DEFAULT_USER_AGENT: &str = concat!("uptimerobot-rs/", env!("CARGO_PKG_VERSION"));

// Environment variable names read by `ClientConfig::from_env`
const UPTIMEROBOT_API_KEY: &str = "UPTIMEROBOT_API_KEY";
const UPTIMEROBOT_BASE_URL: &str = "UPTIMEROBOT_BASE_URL";
const UPTIMEROBOT_USER_AGENT: &str = "UPTIMEROBOT_USER_AGENT";


/// Immutable connection settings for the API client.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    api_key: String,
    user_agent: String,
}


impl ClientConfig {
    /// Config pointing at the production API with the default User-Agent.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            api_key: api_key.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }


    /// Override the base URL. A missing trailing slash is added so that
    /// endpoint paths resolve underneath it.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, UptimeRobotError> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(UptimeRobotError::Config(format!(
                "{base_url} cannot be used as a base url"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }


    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }


    /// Load configuration from environment variables
    ///
    /// Expects:
    /// - UPTIMEROBOT_API_KEY: the account or monitor-specific API key (required)
    /// - UPTIMEROBOT_BASE_URL: alternative API root, e.g. a stub server (optional)
    /// - UPTIMEROBOT_USER_AGENT: User-Agent header value (optional)
    pub fn from_env() -> Result<Self, UptimeRobotError> {
        let api_key = env::var(UPTIMEROBOT_API_KEY).map_err(|_| {
            UptimeRobotError::Config(format!("{UPTIMEROBOT_API_KEY} environment variable not set"))
        })?;
        let mut config = Self::new(api_key.trim());
        if let Ok(base_url) = env::var(UPTIMEROBOT_BASE_URL) {
            config = config.with_base_url(base_url.trim())?;
        }
        if let Ok(user_agent) = env::var(UPTIMEROBOT_USER_AGENT) {
            config = config.with_user_agent(user_agent);
        }
        Ok(config)
    }


    pub fn base_url(&self) -> &Url {
        &self.base_url
    }


    pub fn api_key(&self) -> &str {
        &self.api_key
    }


    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}


// The API key must never end up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
