//! Identity Registry Client Library
//!
//! Typed async access to an identity/naming registry HTTP API: user profile lookup,
//! search, registry-wide enumeration, address queries and domain DKIM keys. Every
//! request carries `Authorization: Basic <base64(app_id:app_secret)>`.

pub mod config;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::{ClientConfig, Endpoints};
pub use error::{RegistryError, Result, TransportKind};
pub use logging::Logger;
pub use registry::{Credentials, RegistryClient, RegistryClientBuilder};
