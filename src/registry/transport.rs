//! Transport seam for registry requests
//!
//! The client never talks to `reqwest` directly; it hands an [`ApiRequest`] to an
//! [`HttpTransport`] and interprets the [`RawResponse`] or [`TransportFailure`] it gets
//! back. [`ReqwestTransport`] is the production implementation, tests plug in their own.

use crate::config::ClientConfig;
use crate::error::handlers::NetworkErrorHandler;
use crate::error::{Result, TransportKind};
use async_trait::async_trait;
use reqwest::Method;
use std::time::Duration;
use url::Url;

/// Outbound request, fully built and authenticated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Whatever came back over the wire, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure below the HTTP layer, possibly with a partial body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportKind,
    pub message: String,
    pub body: Option<Vec<u8>>,
}

impl TransportFailure {
    pub fn new(kind: TransportKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request; called at most once per client operation
    async fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, TransportFailure>;
}

/// Default transport over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn failure(error: &reqwest::Error, context: &str) -> TransportFailure {
        TransportFailure::new(
            NetworkErrorHandler::classify(error),
            NetworkErrorHandler::handle_network_error(error, context).to_string(),
        )
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, TransportFailure> {
        let context = format!("{} {}", request.method, request.url.path());

        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::failure(&e, &context))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            let mut failure = Self::failure(&e, &context);
            failure.kind = TransportKind::Body;
            failure.message = format!("{} (after HTTP {})", failure.message, status);
            failure
        })?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
