//! Completion-callback adapter
//!
//! For callers that prefer a fire-and-forget style over awaiting futures. Each
//! `spawn_*` method runs the operation on the current tokio runtime and invokes the
//! completion exactly once with the operation's result, including configuration and
//! validation failures. Must be called from within a runtime.

use crate::error::Result;
use crate::registry::client::RegistryClient;
use crate::registry::types::{AllUsers, DkimPublicKey, SearchMatch, UnspentOutput, UserLookup};
use std::future::Future;
use tokio::task::JoinHandle;

fn spawn_with<T, Fut, F>(operation: Fut, completion: F) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    F: FnOnce(Result<T>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = operation.await;
        completion(result);
    })
}

impl RegistryClient {
    pub fn spawn_lookup_users<F>(&self, usernames: Vec<String>, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<UserLookup>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(async move { client.lookup_users(usernames.as_slice()).await }, completion)
    }

    pub fn spawn_search<F>(&self, query: String, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<SearchMatch>>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(async move { client.search(&query).await }, completion)
    }

    pub fn spawn_list_all_users<F>(&self, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<AllUsers>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(async move { client.list_all_users().await }, completion)
    }

    pub fn spawn_unspent_outputs<F>(&self, address: String, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<UnspentOutput>>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(async move { client.unspent_outputs(&address).await }, completion)
    }

    pub fn spawn_names_owned_by_address<F>(&self, address: String, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<String>>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(async move { client.names_owned_by_address(&address).await }, completion)
    }

    pub fn spawn_dkim_public_key_for_domain<F>(&self, domain: String, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<DkimPublicKey>) + Send + 'static,
    {
        let client = self.clone();
        spawn_with(
            async move { client.dkim_public_key_for_domain(&domain).await },
            completion,
        )
    }
}
