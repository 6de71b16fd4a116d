use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClockifyError>;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ClockifyError {
    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// timeout, or the body could not be read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status outside `[200, 400)`. The body is
    /// kept so callers can inspect the API's error payload.
    #[error("{status}")]
    Transport { status: StatusCode, body: Vec<u8> },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClockifyError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClockifyError::Transport { status, .. } => Some(*status),
            ClockifyError::Network(err) => err.status(),
            ClockifyError::Decode(_) => None,
        }
    }

    pub fn body(&self) -> Option<&[u8]> {
        match self {
            ClockifyError::Transport { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Rejected [`SessionBuilder`](crate::SessionBuilder) settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("base URL '{0}' cannot carry a path")]
    NotABase(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
