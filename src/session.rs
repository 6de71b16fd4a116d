use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ClockifyError, ConfigError, Result};
use crate::logger::Logger;

pub const CLOCKIFY_API: &str = "https://api.clockify.me/api/v1";
pub const DEFAULT_APP_NAME: &str = "rust-clockify";

const API_KEY_HEADER: &str = "X-Api-Key";

/// An authenticated handle on the Clockify REST API.
///
/// Cloning is cheap: the HTTP client and the log sink are shared.
#[derive(Clone)]
pub struct Session {
    api_token: String,
    base_url: Url,
    client: Client,
    user_agent: String,
    logger: Logger,
}

impl Session {
    /// Opens a session for an existing API token with default settings.
    pub fn open(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: default_base_url(),
            client: Client::new(),
            user_agent: DEFAULT_APP_NAME.to_string(),
            logger: Logger::default(),
        }
    }

    pub fn builder(api_token: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(api_token)
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resumes diagnostic output. A session built with [`Logger::disabled`]
    /// has no sink, so it stays silent.
    pub fn enable_log(&mut self) {
        self.logger.set_enabled(true);
    }

    pub fn disable_log(&mut self) {
        self.logger.set_enabled(false);
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub(crate) fn log(&self, args: fmt::Arguments<'_>) {
        self.logger.log(args);
    }

    pub fn get(&self, path: &str, params: Option<&HashMap<String, String>>) -> Result<Vec<u8>> {
        let url = self.request_url(path, params);
        self.log(format_args!("GETing from URL: {url}"));
        self.request(Method::GET, url, None)
    }

    pub fn post<T: Serialize + ?Sized>(&self, path: &str, payload: Option<&T>) -> Result<Vec<u8>> {
        self.send_json(Method::POST, path, payload)
    }

    pub fn put<T: Serialize + ?Sized>(&self, path: &str, payload: Option<&T>) -> Result<Vec<u8>> {
        self.send_json(Method::PUT, path, payload)
    }

    pub fn patch<T: Serialize + ?Sized>(&self, path: &str, payload: Option<&T>) -> Result<Vec<u8>> {
        self.send_json(Method::PATCH, path, payload)
    }

    pub fn delete(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.request_url(path, None);
        self.log(format_args!("DELETEing URL: {url}"));
        self.request(Method::DELETE, url, None)
    }

    pub(crate) fn decode<T: DeserializeOwned + fmt::Debug>(&self, data: &[u8]) -> Result<T> {
        let value: T = serde_json::from_slice(data)?;
        self.log(format_args!(
            "Unmarshaled '{}' into {value:?}",
            String::from_utf8_lossy(data)
        ));
        Ok(value)
    }

    pub(crate) fn request_url(&self, path: &str, params: Option<&HashMap<String, String>>) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        if let Some(params) = params {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        url
    }

    fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&T>,
    ) -> Result<Vec<u8>> {
        let url = self.request_url(path, None);
        let body = match payload {
            Some(payload) => serde_json::to_vec(payload)?,
            None => Vec::new(),
        };
        self.log(format_args!(
            "{method}ing to URL {url}: {}",
            String::from_utf8_lossy(&body)
        ));
        self.request(method, url, Some(body))
    }

    fn request(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent);

        if !self.api_token.is_empty() {
            builder = builder.header(API_KEY_HEADER, &self.api_token);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let content = response.bytes()?.to_vec();

        if !(200..400).contains(&status.as_u16()) {
            return Err(ClockifyError::Transport {
                status,
                body: content,
            });
        }

        Ok(content)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

/// Per-session configuration for [`Session`].
#[derive(Debug)]
pub struct SessionBuilder {
    api_token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    client: Option<Client>,
    logger: Logger,
}

impl SessionBuilder {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: CLOCKIFY_API.to_string(),
            timeout: None,
            user_agent: DEFAULT_APP_NAME.to_string(),
            client: None,
            logger: Logger::default(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Ignored when a custom client is supplied with [`Self::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn build(self) -> std::result::Result<Session, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(self.base_url));
        }

        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(ConfigError::HttpClient)?
            }
        };

        Ok(Session {
            api_token: self.api_token,
            base_url,
            client,
            user_agent: self.user_agent,
            logger: self.logger,
        })
    }
}

fn default_base_url() -> Url {
    match Url::parse(CLOCKIFY_API) {
        Ok(url) => url,
        Err(err) => unreachable!("{CLOCKIFY_API} must parse: {err}"),
    }
}
