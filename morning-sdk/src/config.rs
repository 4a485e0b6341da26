//! Configuration for player sessions
//!
//! Controls polling cadence, the auto-advance window and the HTTP transport
//! used to reach the Web API.

use std::time::Duration;

use spotify_api::{WebClientConfig, DEFAULT_BASE_URL};

use crate::error::{Result, SdkError};

/// Environment variable overriding the Web API base URL
pub const ENV_BASE_URL: &str = "SPOTIFY_BASE_URL";

/// Environment variable overriding the poll interval, in milliseconds
pub const ENV_POLL_INTERVAL_MS: &str = "MORNING_POLL_INTERVAL_MS";

/// Configuration for a [`crate::PlayerSession`]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// How often playback state is polled
    /// Default: 2 seconds
    pub poll_interval: Duration,

    /// Refresh the device list every N polls
    /// Default: 5
    pub device_refresh_every: u32,

    /// Remaining time at which a playing track counts as finished
    /// Default: 1 second
    pub advance_threshold: Duration,

    /// Buffer size for the command and poll channels
    /// Default: 64
    pub command_buffer_size: usize,

    /// Web API base URL
    /// Default: https://api.spotify.com/v1
    pub api_base_url: String,

    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Default: 10 seconds
    pub request_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(2000),
            device_refresh_every: 5,
            advance_threshold: Duration::from_millis(1000),
            command_buffer_size: 64,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Faster polling for a foreground play bar
    pub fn responsive() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            device_refresh_every: 10,
            ..Default::default()
        }
    }

    /// Fewer API calls, for background tabs
    pub fn resource_efficient() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            device_refresh_every: 12,
            advance_threshold: Duration::from_millis(2500),
            ..Default::default()
        }
    }

    /// Defaults with `SPOTIFY_BASE_URL` and `MORNING_POLL_INTERVAL_MS` applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config.api_base_url = base_url;
        }

        if let Ok(raw) = std::env::var(ENV_POLL_INTERVAL_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                SdkError::Configuration(format!("{} must be a number of milliseconds, got '{}'", ENV_POLL_INTERVAL_MS, raw))
            })?;
            config.poll_interval = Duration::from_millis(millis);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            return Err(SdkError::Configuration(
                "Poll interval must be greater than 0".to_string(),
            ));
        }

        if self.device_refresh_every == 0 {
            return Err(SdkError::Configuration(
                "Device refresh cadence must be at least 1 poll".to_string(),
            ));
        }

        if self.command_buffer_size == 0 {
            return Err(SdkError::Configuration(
                "Command buffer size must be greater than 0".to_string(),
            ));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(SdkError::Configuration(format!(
                "API base URL must be http(s), got '{}'",
                self.api_base_url
            )));
        }

        if self.connect_timeout.is_zero() || self.request_timeout.is_zero() {
            return Err(SdkError::Configuration(
                "HTTP timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Transport settings derived from this configuration
    pub fn web_client_config(&self) -> WebClientConfig {
        WebClientConfig {
            base_url: self.api_base_url.clone(),
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
        }
    }

    /// Builder pattern methods for fluent configuration

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_device_refresh_every(mut self, polls: u32) -> Self {
        self.device_refresh_every = polls;
        self
    }

    pub fn with_advance_threshold(mut self, threshold: Duration) -> Self {
        self.advance_threshold = threshold;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.command_buffer_size = size;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}
