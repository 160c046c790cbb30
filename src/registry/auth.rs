//! Credentials and Basic authorization for registry access

use crate::error::{RegistryError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

pub const ENV_APP_ID: &str = "REGISTRY_APP_ID";
pub const ENV_APP_SECRET: &str = "REGISTRY_APP_SECRET";

/// Application id and secret issued by the registry
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(RegistryError::Validation(
                "App id cannot be empty".to_string(),
            ));
        }
        if self.app_secret.is_empty() {
            return Err(RegistryError::Validation(
                "App secret cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `Basic <base64(app_id:app_secret)>` over the raw UTF-8 bytes
    pub fn authorization_header_value(&self) -> String {
        let pair = format!("{}:{}", self.app_id, self.app_secret);
        format!("Basic {}", STANDARD.encode(pair.as_bytes()))
    }

    /// Read `REGISTRY_APP_ID` and `REGISTRY_APP_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup(ENV_APP_ID)
            .ok_or_else(|| RegistryError::Configuration(format!("{} not set", ENV_APP_ID)))?;
        let app_secret = lookup(ENV_APP_SECRET)
            .ok_or_else(|| RegistryError::Configuration(format!("{} not set", ENV_APP_SECRET)))?;
        Ok(Self::new(app_id, app_secret))
    }
}

/// Thread-safe credential slot shared by every clone of a client.
///
/// The pair is replaced as a whole, so a reader never sees an id from one
/// `initialize` call combined with a secret from another.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<Credentials>>>,
}

impl CredentialStore {
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(credentials)),
        }
    }

    /// Replace the pair. A poisoned lock is recovered, since the slot is only
    /// ever overwritten whole.
    pub fn set(&self, credentials: Credentials) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(credentials);
    }

    /// Snapshot of the current pair, `None` until initialized
    pub fn get(&self) -> Option<Credentials> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_configured(&self) -> bool {
        self.get().is_some()
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("configured", &self.is_configured())
            .finish()
    }
}
