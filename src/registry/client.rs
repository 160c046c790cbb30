// This file contains the RegistryClient struct and its builder. The client owns the
// credential slot, the endpoint templates and the transport; the operation methods in
// `operations/` build URLs and hand them to `execute_json` here, which is the single
// place where responses are interpreted.

use crate::config::{ClientConfig, Endpoints};
use crate::error::handlers::HttpErrorHandler;
use crate::error::{RegistryError, Result};
use crate::logging::Logger;
use crate::registry::auth::{CredentialStore, Credentials};
use crate::registry::transport::{ApiRequest, HttpTransport, ReqwestTransport};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

const BODY_PREVIEW_BYTES: usize = 512;

pub struct RegistryClientBuilder {
    config: ClientConfig,
    credentials: Option<Credentials>,
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Logger>,
}

impl RegistryClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            transport: None,
            logger: None,
        }
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replace the default reqwest transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        self.config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let logger = self
            .logger
            .unwrap_or_else(|| Logger::new(self.config.verbose));

        Ok(RegistryClient {
            endpoints: Arc::new(self.config.endpoints),
            credentials: CredentialStore::new(self.credentials),
            transport,
            logger,
        })
    }
}

impl Default for RegistryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the registry API. Clones share credentials and transport.
#[derive(Clone)]
pub struct RegistryClient {
    pub(crate) endpoints: Arc<Endpoints>,
    credentials: CredentialStore,
    transport: Arc<dyn HttpTransport>,
    pub(crate) logger: Logger,
}

impl RegistryClient {
    /// Client against the default endpoints, configured with the given pair
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Result<Self> {
        Self::builder()
            .with_credentials(Credentials::new(app_id, app_secret))
            .build()
    }

    /// Client configured from `REGISTRY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::builder()
            .with_config(ClientConfig::from_env()?)
            .with_credentials(Credentials::from_env()?)
            .build()
    }

    pub fn builder() -> RegistryClientBuilder {
        RegistryClientBuilder::new()
    }

    /// Set or replace the credential pair for this client and all its clones.
    ///
    /// Requests already in flight keep the pair they were built with.
    pub fn initialize(&self, app_id: impl Into<String>, app_secret: impl Into<String>) {
        self.credentials.set(Credentials::new(app_id, app_secret));
        self.logger.verbose("Registry credentials initialized");
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    /// `Basic <base64(app_id:app_secret)>`, or `None` (logged) before initialization
    pub fn authorization_header_value(&self) -> Option<String> {
        match self.credentials.get() {
            Some(credentials) => Some(credentials.authorization_header_value()),
            None => {
                self.logger
                    .error("Registry client not configured: call initialize() with app id and secret");
                None
            }
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Authorization value for `operation`, or a configuration error before any request
    pub(crate) fn require_authorization(&self, operation: &str) -> Result<String> {
        self.authorization_header_value().ok_or_else(|| {
            RegistryError::Configuration(format!(
                "credentials not set, {} was not sent",
                operation
            ))
        })
    }

    /// Issue one authenticated GET and interpret the response as JSON
    pub(crate) async fn execute_json(&self, operation: &str, url: Url, authorization: String) -> Result<Value> {
        let request = ApiRequest::get(url).with_header(AUTHORIZATION.as_str(), authorization);
        let method = request.method.to_string();
        let target = request.url.to_string();

        self.logger.verbose(&format!("{}: {} {}", operation, method, target));
        self.logger.debug(&format!(
            "{} request headers: {}",
            operation,
            header_names(&request)
        ));
        let started = Instant::now();

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(failure) => {
                self.logger.error(&format!("{} failed: {}", operation, failure.message));
                let body = failure
                    .body
                    .as_deref()
                    .filter(|body| !is_blank(body))
                    .map(parse_lenient);
                return Err(RegistryError::Transport {
                    kind: failure.kind,
                    message: failure.message,
                    body,
                });
            }
        };

        self.logger.request_summary(
            &method,
            &target,
            response.status,
            response.body.len(),
            started.elapsed(),
        );
        self.logger.trace(&format!(
            "{} response body: {}",
            operation,
            body_preview(&response.body)
        ));

        if !(200..300).contains(&response.status) {
            let body = (!is_blank(&response.body)).then(|| parse_lenient(&response.body));
            let error = HttpErrorHandler::handle_status(response.status, body, operation);
            self.logger.warning(&error.to_string());
            return Err(error);
        }

        if is_blank(&response.body) {
            return Err(RegistryError::EmptyBody(operation.to_string()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            RegistryError::Parse(format!("Failed to parse {} response: {}", operation, e))
        })
    }
}

/// Convert an untyped body into the operation's model
pub(crate) fn decode<T: DeserializeOwned>(operation: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        RegistryError::Parse(format!("Unexpected {} response shape: {}", operation, e))
    })
}

/// Header names only; values carry credentials
fn header_names(request: &ApiRequest) -> String {
    request
        .headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn body_preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_BYTES);
    let mut preview = String::from_utf8_lossy(&body[..end]).into_owned();
    if body.len() > end {
        preview.push_str("...");
    }
    preview
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// JSON if possible, otherwise the raw text
fn parse_lenient(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
