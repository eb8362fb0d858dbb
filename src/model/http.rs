/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Undecoded response body
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a response whose body is the given JSON value
    #[must_use]
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// HTTP transport used by the session manager and the API client
///
/// The transport only moves bytes: it must not interpret status codes or bodies.
/// Implement it to plug in a different HTTP stack or a scripted fake in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a single request
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Full URL to request
    /// * `headers` - Vector of (header_name, header_value) tuples
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - Any response the server produced, whatever its status
    /// * `Err(AppError)` - If no response could be obtained
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, AppError>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport using the timeout from the configuration
    ///
    /// # Returns
    /// * `Ok(ReqwestTransport)` - Ready to use transport
    /// * `Err(AppError::Network)` - If the underlying client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, AppError> {
        debug!("{} {}", method, redact_token(url));

        let mut request = self.client.request(method, url);

        for (name, value) in &headers {
            request = request.header(*name, *value);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Drops the trailing token segment of an API URL so it never reaches the logs
pub(crate) fn redact_token(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((prefix, _)) if url.contains("/api/") || url.contains("/logoff/") => {
            format!("{prefix}/***")
        }
        _ => url.to_string(),
    }
}
