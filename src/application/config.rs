use crate::constants::{
    DEFAULT_HOSTNAME, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REST_TIMEOUT,
    DEFAULT_STREAMING_HOSTNAME,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use crate::utils::time::DateTimeFormat;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the v20 API client
pub struct Config {
    /// Bearer token used in the `Authorization` header
    #[serde(skip_serializing, default)]
    pub token: String,
    /// Default account used by examples and tests
    pub account_id: String,
    /// Optional application name appended to the user agent
    pub application: Option<String>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Streaming API configuration
    pub streaming: StreamingConfig,
    /// Wire format requested for date-time fields
    pub datetime_format: DateTimeFormat,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Host serving the REST endpoints
    pub hostname: String,
    /// TCP port
    pub port: u16,
    /// Whether to use HTTPS
    pub ssl: bool,
    /// Timeout in seconds for REST API requests; 0 disables the timeout
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the streaming endpoints
pub struct StreamingConfig {
    /// Host serving the streaming endpoints
    pub hostname: String,
    /// TCP port
    pub port: u16,
    /// Whether to use HTTPS
    pub ssl: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_env_or_default("V20_TOKEN", String::new());
        if token.is_empty() {
            error!("V20_TOKEN not found in environment variables or .env file");
        }

        let port = get_env_or_default("V20_PORT", DEFAULT_PORT);
        let ssl = get_env_flag("V20_SSL", true);

        Config {
            token,
            account_id: get_env_or_default("V20_ACCOUNT_ID", String::new()),
            application: get_env_or_none("V20_APPLICATION"),
            rest_api: RestApiConfig {
                hostname: get_env_or_default("V20_HOSTNAME", DEFAULT_HOSTNAME.to_string()),
                port,
                ssl,
                timeout: get_env_or_default("V20_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            streaming: StreamingConfig {
                hostname: get_env_or_default(
                    "V20_STREAMING_HOSTNAME",
                    DEFAULT_STREAMING_HOSTNAME.to_string(),
                ),
                port,
                ssl,
            },
            datetime_format: get_env_or_default("V20_DATETIME_FORMAT", DateTimeFormat::Rfc3339),
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "V20_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "V20_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "V20_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
        }
    }

    /// Creates a configuration that sends both REST and streaming requests to `base_url`
    ///
    /// Intended for tests and proxies; `base_url` is `scheme://host[:port]`.
    pub fn for_base_url(base_url: &str, token: &str) -> Self {
        let (ssl, rest) = match base_url.split_once("://") {
            Some((scheme, rest)) => (scheme.eq_ignore_ascii_case("https"), rest),
            None => (true, base_url),
        };
        let rest = rest.trim_end_matches('/');
        let (hostname, port) = match rest.rsplit_once(':') {
            Some((host, port)) => match port.parse::<u16>() {
                Ok(port) => (host.to_string(), port),
                Err(_) => (rest.to_string(), if ssl { 443 } else { 80 }),
            },
            None => (rest.to_string(), if ssl { 443 } else { 80 }),
        };

        Config {
            token: token.to_string(),
            account_id: String::new(),
            application: None,
            rest_api: RestApiConfig {
                hostname: hostname.clone(),
                port,
                ssl,
                timeout: DEFAULT_REST_TIMEOUT,
            },
            streaming: StreamingConfig { hostname, port, ssl },
            datetime_format: DateTimeFormat::Rfc3339,
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Sets the bearer token
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Sets the default account
    #[must_use]
    pub fn with_account_id(mut self, account_id: &str) -> Self {
        self.account_id = account_id.to_string();
        self
    }

    /// Sets the application name reported in the user agent
    #[must_use]
    pub fn with_application(mut self, application: &str) -> Self {
        self.application = Some(application.to_string());
        self
    }

    /// Sets the requested date-time wire format
    #[must_use]
    pub fn with_datetime_format(mut self, format: DateTimeFormat) -> Self {
        self.datetime_format = format;
        self
    }

    /// Base URL for REST requests
    #[must_use]
    pub fn rest_url(&self) -> String {
        base_url(&self.rest_api.hostname, self.rest_api.port, self.rest_api.ssl)
    }

    /// Base URL for streaming requests
    #[must_use]
    pub fn stream_url(&self) -> String {
        base_url(&self.streaming.hostname, self.streaming.port, self.streaming.ssl)
    }

    /// User agent sent with every request
    #[must_use]
    pub fn user_agent(&self) -> String {
        match &self.application {
            Some(app) => format!("{} ({app})", crate::constants::USER_AGENT),
            None => crate::constants::USER_AGENT.to_string(),
        }
    }
}

fn base_url(hostname: &str, port: u16, ssl: bool) -> String {
    let scheme = if ssl { "https" } else { "http" };
    let default_port = if ssl { 443 } else { 80 };
    if port == default_port {
        format!("{scheme}://{hostname}")
    } else {
        format!("{scheme}://{hostname}:{port}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ports_are_omitted_from_urls() {
        let config = Config::for_base_url("https://api.example.com", "t");
        assert_eq!(config.rest_url(), "https://api.example.com");
        assert_eq!(config.stream_url(), "https://api.example.com");
    }

    #[test]
    fn explicit_ports_are_kept() {
        let config = Config::for_base_url("http://127.0.0.1:1234/", "t");
        assert!(!config.rest_api.ssl);
        assert_eq!(config.rest_api.port, 1234);
        assert_eq!(config.rest_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn token_is_not_displayed() {
        let config = Config::for_base_url("http://localhost:80", "secret-token");
        assert!(!config.to_string().contains("secret-token"));
    }

    #[test]
    fn user_agent_includes_application() {
        let config = Config::for_base_url("http://localhost", "t").with_application("bot");
        assert!(config.user_agent().ends_with("(bot)"));
    }
}
