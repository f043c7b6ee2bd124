use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
}

/// A single call against the candidate API. `data` is sent as the JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub data: Value,
}

impl ApiRequest {
    #[must_use]
    pub fn post(path: impl Into<String>, data: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            data,
        }
    }
}

/// Sends requests to the candidate API. Callers only learn success or failure;
/// response bodies are not read.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<(), TransportError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: ApiConfig,
}

impl HttpTransport {
    /// Build a transport with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: ApiRequest) -> Result<(), TransportError> {
        let url = self.config.url_for(&request.path);
        let builder = match request.method {
            Method::Post => self.client.post(url).json(&request.data),
        };

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(TransportError::HttpStatus(response.status()));
        }

        Ok(())
    }
}
