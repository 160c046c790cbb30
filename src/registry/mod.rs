//! Registry module for identity registry interactions
//!
//! This module provides credentials, URL construction, the transport seam and the
//! client with its lookup, search, address and domain operations.

pub mod auth;
pub mod callback;
pub mod client;
pub mod endpoints;
pub mod operations;
pub mod transport;
pub mod types;

pub use auth::{CredentialStore, Credentials};
pub use client::{RegistryClient, RegistryClientBuilder};
pub use transport::{ApiRequest, HttpTransport, RawResponse, ReqwestTransport, TransportFailure};
pub use types::{
    AllUsers, DkimPublicKey, RegistrationStats, SearchMatch, UnspentOutput, UserLookup, UserRecord,
};
