//! Domain operations (GET {domains}/{domain}/dkim)

use super::DKIM_PUBLIC_KEY;
use crate::error::Result;
use crate::registry::client::{RegistryClient, decode};
use crate::registry::types::DkimPublicKey;
use serde_json::Value;

impl RegistryClient {
    pub async fn dkim_public_key_for_domain(&self, domain: &str) -> Result<DkimPublicKey> {
        let body = self.dkim_public_key_for_domain_json(domain).await?;
        decode(DKIM_PUBLIC_KEY, body)
    }

    pub async fn dkim_public_key_for_domain_json(&self, domain: &str) -> Result<Value> {
        let authorization = self.require_authorization(DKIM_PUBLIC_KEY)?;
        let url = self.endpoints.dkim_url(domain)?;
        self.execute_json(DKIM_PUBLIC_KEY, url, authorization).await
    }
}
