/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::V20Result;
use crate::model::http::HttpClient;
use crate::model::request::Request;
use crate::model::response::{DecodePlan, Response};
use crate::model::stream::{RecordStream, StreamRecord, decode_response};
use std::sync::Arc;
use tracing::debug;

/// Entry point to every API operation
///
/// The per-resource operations live on the service traits in
/// [`crate::application::interfaces`], all implemented by this type. Cloning is
/// cheap and clones share the connection pool and the rate limiter.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client for `config`
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: Config) -> V20Result<Self> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a prepared request and decodes it through `T`'s status table
    ///
    /// Useful for operations built by hand from [`crate::model::endpoints`].
    ///
    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn execute<T: DecodePlan>(&self, request: &Request) -> V20Result<Response<T>> {
        let response = self.http_client.send::<T>(request).await?;
        debug!(
            "{} {} -> {}",
            response.method, response.path, response.status
        );
        Ok(response)
    }

    /// Opens a prepared streaming request
    ///
    /// # Errors
    /// See [`HttpClient::open_stream`].
    pub async fn open_stream<T>(&self, request: &Request) -> V20Result<RecordStream<T>>
    where
        T: StreamRecord + Send + 'static,
    {
        let response = self.http_client.open_stream(request).await?;
        Ok(decode_response(response))
    }
}
