use thiserror::Error;

/// Every failure an UptimeRobot call can report.
///
/// Each call either succeeds or returns exactly one of these. Nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum UptimeRobotError {
    /// The HTTP request never completed (DNS, connect, timeout, body read).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected envelope.
    #[error("Parse error: {message}. Body: {body}")]
    Decode { message: String, body: String },

    /// The service rejected the request, either with a non-success HTTP
    /// status (`status` is set and `message` is the raw body) or with
    /// `"stat": "fail"` in the envelope.
    #[error("API error{}: {message}", http_suffix(.status))]
    Api { status: Option<u16>, message: String },

    /// A caller-side precondition was violated before anything was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl UptimeRobotError {
    pub(crate) fn decode(err: impl std::fmt::Display, body: &str) -> Self {
        UptimeRobotError::Decode {
            message: err.to_string(),
            body: body.to_string(),
        }
    }

    /// HTTP status code for errors caused by a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn http_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

impl From<url::ParseError> for UptimeRobotError {
    fn from(err: url::ParseError) -> Self {
        UptimeRobotError::Config(format!("invalid base url: {err}"))
    }
}
