/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::error::{AppError, V20Result};
use crate::model::request::Request;
use crate::model::response::{DecodePlan, Response};
use reqwest::Client as HttpInternalClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Transport shared by every operation of a [`crate::application::client::Client`]
///
/// Adds the bearer token, the date-time format header and the user agent, waits on
/// the rate limiter, and sends each request exactly once.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates the transport for `config`
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(config: Arc<Config>) -> V20Result<Self> {
        let mut builder = HttpInternalClient::builder().user_agent(config.user_agent());
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Configuration the transport was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends `request` and interprets the body through `T`'s status table
    ///
    /// # Errors
    /// Fails on transport errors, unbound path parameters, malformed JSON, or a
    /// registered status whose body does not match its shape. Unregistered statuses
    /// and non-JSON bodies are not errors.
    pub async fn send<T: DecodePlan>(&self, request: &Request) -> V20Result<Response<T>> {
        let path = request.path()?;
        let response = self.dispatch(request, &path).await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let raw_body = response.text().await?;
        debug!("Response status: {} ({} bytes)", status, raw_body.len());

        Ok(Response::interpret(
            request.method().clone(),
            path,
            status,
            content_type,
            raw_body,
        )?)
    }

    /// Opens a streaming request and returns the live response
    ///
    /// # Errors
    /// Returns [`AppError::Unexpected`] when the server answers with a non-success
    /// status, since such a body cannot be read as a record stream.
    pub async fn open_stream(&self, request: &Request) -> V20Result<reqwest::Response> {
        let path = request.path()?;
        let response = self.dispatch(request, &path).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Stream open failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }
        debug!("Stream opened: {}", path);
        Ok(response)
    }

    async fn dispatch(&self, request: &Request, path: &str) -> V20Result<reqwest::Response> {
        let base = if request.is_stream() {
            self.config.stream_url()
        } else {
            self.config.rest_url()
        };
        let url = format!("{base}{path}");
        let auth_header_value = format!("Bearer {}", self.config.token);

        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Content-Type", "application/json"),
            (
                "Accept-Datetime-Format",
                self.config.datetime_format.as_header(),
            ),
        ];

        make_http_request(
            &self.http_client,
            &self.rate_limiter,
            request.method().clone(),
            &url,
            headers,
            request.query(),
            request.json_body(),
            request.is_stream(),
        )
        .await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("rest_url", &self.config.rest_url())
            .field("stream_url", &self.config.stream_url())
            .finish()
    }
}

/// Makes one HTTP request after waiting on the rate limiter
///
/// Non-success statuses are returned as responses, not errors; deciding what they
/// mean is left to the caller. Streaming requests are sent without the overall
/// timeout so that long-lived bodies are not cut off.
///
/// # Errors
/// Fails only on transport errors.
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(String, String)],
    body: Option<&Value>,
    stream: bool,
) -> V20Result<reqwest::Response> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    if stream {
        // reqwest has no per-request way to lift the client timeout, so use a long one
        request = request.timeout(Duration::from_secs(u64::from(u32::MAX)));
    }

    Ok(request.send().await?)
}
