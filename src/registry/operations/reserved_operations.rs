//! Write operations the registry API reserves but this client does not implement yet.
//!
//! They fail fast with `NotImplemented` and never touch the network.

use crate::error::{RegistryError, Result};
use crate::registry::client::RegistryClient;
use serde_json::Value;

impl RegistryClient {
    fn reserved(&self, operation: &str) -> RegistryError {
        self.logger
            .warning(&format!("{} is not supported by this client", operation));
        RegistryError::NotImplemented(operation.to_string())
    }

    pub async fn register_user(&self, _username: &str, _recipient_address: &str, _profile: &Value) -> Result<Value> {
        Err(self.reserved("register user"))
    }

    pub async fn update_user(&self, _username: &str, _profile: &Value, _owner_public_key: &str) -> Result<Value> {
        Err(self.reserved("update user"))
    }

    pub async fn transfer_user(&self, _username: &str, _transfer_address: &str, _owner_public_key: &str) -> Result<Value> {
        Err(self.reserved("transfer user"))
    }

    pub async fn broadcast_transaction(&self, _signed_hex: &str) -> Result<Value> {
        Err(self.reserved("broadcast transaction"))
    }
}
