//! Address operations
//!
//! - Unspent outputs (GET {addresses}/{address}/unspents)
//! - Names owned (GET {addresses}/{address}/names)

use super::{NAMES_OWNED, UNSPENT_OUTPUTS};
use crate::error::Result;
use crate::registry::client::{RegistryClient, decode};
use crate::registry::types::{ListEnvelope, UnspentOutput};
use serde_json::Value;

impl RegistryClient {
    pub async fn unspent_outputs(&self, address: &str) -> Result<Vec<UnspentOutput>> {
        let body = self.unspent_outputs_json(address).await?;
        let outputs: ListEnvelope<UnspentOutput> = decode(UNSPENT_OUTPUTS, body)?;
        Ok(outputs.into_vec())
    }

    pub async fn unspent_outputs_json(&self, address: &str) -> Result<Value> {
        let authorization = self.require_authorization(UNSPENT_OUTPUTS)?;
        let url = self.endpoints.unspents_url(address)?;
        self.execute_json(UNSPENT_OUTPUTS, url, authorization).await
    }

    /// Names registered to `address`
    pub async fn names_owned_by_address(&self, address: &str) -> Result<Vec<String>> {
        let body = self.names_owned_by_address_json(address).await?;
        let names: ListEnvelope<String> = decode(NAMES_OWNED, body)?;
        Ok(names.into_vec())
    }

    pub async fn names_owned_by_address_json(&self, address: &str) -> Result<Value> {
        let authorization = self.require_authorization(NAMES_OWNED)?;
        let url = self.endpoints.names_url(address)?;
        self.execute_json(NAMES_OWNED, url, authorization).await
    }
}
