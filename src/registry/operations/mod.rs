//! Registry operations, one module per endpoint family
//!
//! Every operation follows the same path: check credentials, build the URL, run
//! `RegistryClient::execute_json`, then decode into the typed model. The `*_json`
//! variants stop before decoding and hand back the body as-is.

pub mod address_operations;
pub mod domain_operations;
pub mod reserved_operations;
pub mod user_operations;

pub const LOOKUP_USERS: &str = "user lookup";
pub const SEARCH: &str = "search";
pub const LIST_ALL_USERS: &str = "all users listing";
pub const UNSPENT_OUTPUTS: &str = "unspent outputs query";
pub const NAMES_OWNED: &str = "names by address query";
pub const DKIM_PUBLIC_KEY: &str = "dkim lookup";
