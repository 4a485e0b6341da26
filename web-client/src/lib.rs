//! Private HTTP client for Spotify Web API communication
//!
//! This crate provides a minimal JSON-over-HTTP client with bearer
//! authentication. It knows nothing about individual endpoints; the
//! `spotify-api` crate layers typed operations on top of it.

mod error;

pub use error::WebError;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

/// Base URL of the public Spotify Web API
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// HTTP verbs used by the Web API player endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }

    /// Whether the verb carries a request body
    pub fn has_body(self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A single request against the Web API
#[derive(Debug, Clone, PartialEq)]
pub struct WebRequest {
    pub method: HttpMethod,
    /// Path relative to the base URL, e.g. `me/player/play`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl WebRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Connection settings for the [`WebClient`]
#[derive(Debug, Clone)]
pub struct WebClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for WebClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// A minimal bearer-authenticated JSON client
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebClient {
    http: Client,
    base_url: String,
}

/// Spotify error envelope: `{"error": {"status": 404, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl WebClient {
    /// Create a client against the public Web API with default timeouts
    pub fn new() -> Result<Self, WebError> {
        Self::with_config(WebClientConfig::default())
    }

    /// Create a client with explicit connection settings
    pub fn with_config(config: WebClientConfig) -> Result<Self, WebError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| WebError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the raw response body
    ///
    /// Returns `Ok(None)` for `204 No Content` and empty bodies, which the
    /// player endpoints use to acknowledge commands and to signal "nothing
    /// is playing".
    pub async fn call(&self, request: WebRequest, token: &str) -> Result<Option<String>, WebError> {
        let url = self.url_for(&request.path);
        trace!(method = ?request.method, %url, "web api request");

        let mut builder = self
            .http
            .request(request.method.as_reqwest(), &url)
            .bearer_auth(token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            Some(body) => builder.json(&body),
            // The player endpoints reject PUT/POST without a Content-Length
            None if request.method.has_body() => builder.body(String::new()),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| WebError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| WebError::Network(e.to_string()))?;

        interpret_response(status, text)
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn interpret_response(status: StatusCode, body: String) -> Result<Option<String>, WebError> {
    if status.is_success() {
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }
        return Ok(Some(body));
    }

    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    if status == StatusCode::UNAUTHORIZED {
        return Err(WebError::Unauthorized(message));
    }

    Err(WebError::Status {
        code: status.as_u16(),
        message,
    })
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}
