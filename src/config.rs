//! Configuration module for endpoint templates and client settings

use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use url::Url;

pub const DEFAULT_API_ROOT: &str = "https://api.onename.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("identity-registry-client/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_ROOT: &str = "REGISTRY_API_ROOT";
pub const ENV_TIMEOUT_SECS: &str = "REGISTRY_TIMEOUT_SECS";
pub const ENV_VERBOSE: &str = "REGISTRY_VERBOSE";

/// Base URL for each endpoint family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub lookup: Url,
    pub search: Url,
    pub all_users: Url,
    pub addresses: Url,
    pub domains: Url,
    /// Reserved for transaction broadcast, no operation uses it yet
    pub transactions: Url,
}

impl Endpoints {
    /// Derive every template from a single API root such as `https://host/v1`
    pub fn with_root(root: &str) -> Result<Self> {
        let root = parse_http_url(root)?;
        let users = child(&root, "users")?;

        Ok(Self {
            lookup: users.clone(),
            search: child(&root, "search")?,
            all_users: users,
            addresses: child(&root, "addresses")?,
            domains: child(&root, "domains")?,
            transactions: child(&root, "transactions")?,
        })
    }

    pub fn with_lookup(mut self, url: &str) -> Result<Self> {
        self.lookup = parse_http_url(url)?;
        Ok(self)
    }

    pub fn with_search(mut self, url: &str) -> Result<Self> {
        self.search = parse_http_url(url)?;
        Ok(self)
    }

    pub fn with_all_users(mut self, url: &str) -> Result<Self> {
        self.all_users = parse_http_url(url)?;
        Ok(self)
    }

    pub fn with_addresses(mut self, url: &str) -> Result<Self> {
        self.addresses = parse_http_url(url)?;
        Ok(self)
    }

    pub fn with_domains(mut self, url: &str) -> Result<Self> {
        self.domains = parse_http_url(url)?;
        Ok(self)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_root(DEFAULT_API_ROOT).expect("default API root is a valid https URL")
    }
}

fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(RegistryError::Validation(format!(
            "Invalid registry address: {}. Must start with http:// or https://",
            raw
        )));
    }
    if url.cannot_be_a_base() {
        return Err(RegistryError::Validation(format!(
            "Registry address cannot carry path segments: {}",
            raw
        )));
    }
    Ok(url)
}

fn child(root: &Url, segment: &str) -> Result<Url> {
    let mut url = root.clone();
    url.path_segments_mut()
        .map_err(|_| RegistryError::Validation(format!("Cannot extend URL: {}", root)))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Client-wide settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_api_root(mut self, root: &str) -> Result<Self> {
        self.endpoints = Endpoints::with_root(root)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ValidationErrorHandler::validate_timeout(self.timeout_secs)?;
        if self.user_agent.trim().is_empty() {
            return Err(RegistryError::Validation(
                "User agent cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load settings from `REGISTRY_*` environment variables, defaulting anything unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root) = lookup(ENV_API_ROOT) {
            config = config.with_api_root(&root)?;
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            let timeout = timeout.trim().parse::<u64>().map_err(|_| {
                RegistryError::Validation(format!(
                    "{} must be a number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, timeout
                ))
            })?;
            config = config.with_timeout(timeout);
        }

        if let Some(verbose) = lookup(ENV_VERBOSE) {
            config = config.with_verbose(matches!(
                verbose.trim().to_lowercase().as_str(),
                "1" | "true" | "yes"
            ));
        }

        config.validate()?;
        Ok(config)
    }
}
