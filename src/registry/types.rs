// Registry API types - response payload structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One entry of a user lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Profile document as published by the user
    #[serde(default)]
    pub profile: Value,

    /// Proofs linking the profile to external accounts
    #[serde(default)]
    pub verifications: Vec<Value>,
}

/// Lookup result keyed by username
pub type UserLookup = BTreeMap<String, UserRecord>;

/// Search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub profile: Value,

    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationStats {
    pub registrations: u64,
}

/// Registry-wide enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllUsers {
    pub stats: RegistrationStats,

    #[serde(default)]
    pub usernames: Vec<String>,
}

/// Unspent transaction output held by an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnspentOutput {
    #[serde(default)]
    pub transaction_hash: Option<String>,

    #[serde(default)]
    pub output_index: Option<u32>,

    /// Amount in satoshis
    #[serde(default)]
    pub value: Option<u64>,

    #[serde(default)]
    pub script_hex: Option<String>,

    #[serde(default)]
    pub confirmations: Option<u64>,

    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DKIM public key published for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DkimPublicKey {
    #[serde(default)]
    pub public_key: Option<String>,

    #[serde(default)]
    pub key_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// List payloads arrive either bare or wrapped in a named envelope
/// (`{"results": [...]}`, `{"unspents": [...]}`, `{"names": [...]}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Bare(Vec<T>),
    Results { results: Vec<T> },
    Unspents { unspents: Vec<T> },
    Names { names: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items)
            | ListEnvelope::Results { results: items }
            | ListEnvelope::Unspents { unspents: items }
            | ListEnvelope::Names { names: items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_lookup_parses_keyed_records() {
        let body = json!({
            "bob.id": {
                "profile": {"name": {"formatted": "Bob"}},
                "verifications": [{"service": "twitter", "valid": true}]
            }
        });
        let lookup: UserLookup = serde_json::from_value(body).unwrap();
        let bob = &lookup["bob.id"];
        assert_eq!(bob.profile["name"]["formatted"], "Bob");
        assert_eq!(bob.verifications.len(), 1);
    }

    #[test]
    fn user_record_tolerates_missing_verifications() {
        let record: UserRecord = serde_json::from_value(json!({"profile": {}})).unwrap();
        assert!(record.verifications.is_empty());
    }

    #[test]
    fn list_envelope_accepts_bare_and_wrapped() {
        let bare: ListEnvelope<String> = serde_json::from_value(json!(["a.id", "b.id"])).unwrap();
        assert_eq!(bare.into_vec(), vec!["a.id", "b.id"]);

        let wrapped: ListEnvelope<String> =
            serde_json::from_value(json!({"names": ["c.id"]})).unwrap();
        assert_eq!(wrapped.into_vec(), vec!["c.id"]);

        let results: ListEnvelope<SearchMatch> =
            serde_json::from_value(json!({"results": [{"profile": {}, "username": "d"}]})).unwrap();
        assert_eq!(results.into_vec()[0].username.as_deref(), Some("d"));
    }

    #[test]
    fn unspent_output_keeps_unknown_fields() {
        let output: UnspentOutput = serde_json::from_value(json!({
            "transaction_hash": "e1f2",
            "output_index": 1,
            "value": 5500,
            "script_opcodes": "OP_DUP"
        }))
        .unwrap();
        assert_eq!(output.value, Some(5500));
        assert_eq!(output.extra["script_opcodes"], "OP_DUP");
    }

    #[test]
    fn all_users_requires_stats() {
        let all: AllUsers = serde_json::from_value(json!({
            "stats": {"registrations": 2},
            "usernames": ["a", "b"]
        }))
        .unwrap();
        assert_eq!(all.stats.registrations, 2);
        assert!(serde_json::from_value::<AllUsers>(json!({"usernames": []})).is_err());
    }
}
