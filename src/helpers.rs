//! Helper types and functions shared by every endpoint: form building,
//! the single POST path, and envelope checking.

use crate::config::ClientConfig;
use crate::errors::UptimeRobotError;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, trace, warn};


const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";


/// Ordered form parameters for a request body.
///
/// Setting a key that is already present replaces its value in place, so the
/// encoded order is the order keys were first set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FormParams {
    pairs: Vec<(String, String)>,
}


impl FormParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }


    pub(crate) fn set(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }


    /// Set `key` only when a value is present. `Some(0)` and `Some("")` are
    /// still emitted.
    pub(crate) fn set_opt<T: ToString>(&mut self, key: &str, value: Option<T>) {
        if let Some(v) = value {
            self.set(key, v);
        }
    }


    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }


    #[cfg(test)]
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }


    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|(k, _)| k.as_str()).collect()
    }


    pub(crate) fn encode(&self) -> Result<String, UptimeRobotError> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| UptimeRobotError::InvalidArgument(format!("failed to encode form: {e}")))
    }
}


/// Send one form-encoded POST to `path` under the configured base URL.
///
/// `api_key` and `format=json` are always injected. A non-success HTTP status
/// is an error whatever the body says.
pub(crate) async fn post_form(
    http_client: &Client,
    config: &ClientConfig,
    path: &str,
    mut form: FormParams,
) -> Result<String, UptimeRobotError> {
    form.set("api_key", config.api_key());
    form.set("format", "json");
    let url = config.base_url().join(path.trim_start_matches('/'))?;
    debug!(%url, "Sending request");
    let body = form.encode()?;
    let resp = http_client
        .post(url.as_str())
        .header(ACCEPT, "application/json")
        .header(USER_AGENT, config.user_agent())
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(body)
        .send()
        .await?;
    let status = resp.status();
    let text = resp.text().await?;
    trace!(%status, body = %text, "Received response");
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "Non-success HTTP status from server");
        return Err(UptimeRobotError::Api {
            status: Some(status.as_u16()),
            message: text,
        });
    }
    Ok(text)
}


/// Fields every envelope carries regardless of payload.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    stat: String,
    #[serde(default)]
    error: Option<serde_json::Value>,
}


/// Decode an envelope body into `T` after checking that `stat` is `"ok"`.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, UptimeRobotError> {
    let head: EnvelopeStatus =
        serde_json::from_str(body).map_err(|e| UptimeRobotError::decode(e, body))?;
    if head.stat != "ok" {
        warn!(stat = %head.stat, "Server reports request not ok");
        let message = match head.error {
            Some(detail) => describe_error(&detail),
            None => body.to_string(),
        };
        return Err(UptimeRobotError::Api { status: None, message });
    }
    serde_json::from_str(body).map_err(|e| UptimeRobotError::decode(e, body))
}


/// Check that `stat` is `"ok"` without looking at the payload.
pub(crate) fn check_envelope(body: &str) -> Result<(), UptimeRobotError> {
    parse_envelope::<IgnoredAny>(body).map(|_| ())
}


/// Flatten the service's `error` object into one line.
fn describe_error(detail: &serde_json::Value) -> String {
    let field = |name: &str| detail.get(name).and_then(|v| v.as_str());
    let mut out = match (field("type"), field("message")) {
        (Some(kind), Some(msg)) => format!("{kind}: {msg}"),
        (None, Some(msg)) => msg.to_string(),
        (Some(kind), None) => kind.to_string(),
        (None, None) => detail.to_string(),
    };
    if let Some(param) = field("parameter_name") {
        out.push_str(&format!(" (parameter: {param})"));
    }
    out
}
