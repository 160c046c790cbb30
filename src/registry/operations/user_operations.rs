//! User operations: profile lookup, search and registry-wide listing
//!
//! - Lookup (GET {users}/{name1,name2,...})
//! - Search (GET {search}?query=...)
//! - All users (GET {users})

use super::{LIST_ALL_USERS, LOOKUP_USERS, SEARCH};
use crate::error::Result;
use crate::registry::client::{RegistryClient, decode};
use crate::registry::types::{AllUsers, ListEnvelope, SearchMatch, UserLookup};
use serde_json::Value;

impl RegistryClient {
    /// Profiles and verifications for each username, keyed by username
    pub async fn lookup_users<S: AsRef<str> + Sync>(&self, usernames: &[S]) -> Result<UserLookup> {
        let body = self.lookup_users_json(usernames).await?;
        decode(LOOKUP_USERS, body)
    }

    pub async fn lookup_users_json<S: AsRef<str> + Sync>(&self, usernames: &[S]) -> Result<Value> {
        let authorization = self.require_authorization(LOOKUP_USERS)?;
        let url = self.endpoints.lookup_url(usernames)?;
        self.logger
            .verbose(&format!("Looking up {} user(s)", usernames.len()));
        self.execute_json(LOOKUP_USERS, url, authorization).await
    }

    /// Profiles matching a free-text query
    pub async fn search(&self, query: &str) -> Result<Vec<SearchMatch>> {
        let body = self.search_json(query).await?;
        let matches: ListEnvelope<SearchMatch> = decode(SEARCH, body)?;
        Ok(matches.into_vec())
    }

    pub async fn search_json(&self, query: &str) -> Result<Value> {
        let authorization = self.require_authorization(SEARCH)?;
        let url = self.endpoints.search_url(query)?;
        self.execute_json(SEARCH, url, authorization).await
    }

    /// Registration count and every registered username
    pub async fn list_all_users(&self) -> Result<AllUsers> {
        let body = self.list_all_users_json().await?;
        let all: AllUsers = decode(LIST_ALL_USERS, body)?;
        self.logger.detail(&format!(
            "Registry reports {} registrations",
            all.stats.registrations
        ));
        Ok(all)
    }

    pub async fn list_all_users_json(&self) -> Result<Value> {
        let authorization = self.require_authorization(LIST_ALL_USERS)?;
        let url = self.endpoints.all_users_url();
        self.execute_json(LIST_ALL_USERS, url, authorization).await
    }
}
