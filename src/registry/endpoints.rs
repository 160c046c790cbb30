//! Request URL construction for each endpoint family
//!
//! Parameters are pushed as single path segments (or query pairs for search), so
//! `/`, `?`, `#`, `%` and whitespace inside a username, address or domain are
//! percent-encoded instead of changing the shape of the URL. Commas and dots pass
//! through untouched, which keeps multi-user lookups readable. A parameter that is
//! exactly `.` or `..` is rejected, since the URL path would normalize it away.

use crate::config::Endpoints;
use crate::error::handlers::ValidationErrorHandler;
use crate::error::{RegistryError, Result};
use url::Url;

pub const SEARCH_QUERY_PARAM: &str = "query";

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| RegistryError::Validation(format!("Cannot extend URL: {}", base)))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

impl Endpoints {
    /// `{lookup}/{user1,user2,...}`
    pub fn lookup_url<S: AsRef<str>>(&self, usernames: &[S]) -> Result<Url> {
        ValidationErrorHandler::validate_usernames(usernames)?;
        let joined = usernames
            .iter()
            .map(|name| name.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        with_segments(&self.lookup, &[&joined])
    }

    /// `{search}?query={query}`
    pub fn search_url(&self, query: &str) -> Result<Url> {
        ValidationErrorHandler::validate_segment("Search query", query)?;
        let mut url = self.search.clone();
        url.query_pairs_mut().append_pair(SEARCH_QUERY_PARAM, query);
        Ok(url)
    }

    pub fn all_users_url(&self) -> Url {
        self.all_users.clone()
    }

    /// `{addresses}/{address}/unspents`
    pub fn unspents_url(&self, address: &str) -> Result<Url> {
        ValidationErrorHandler::validate_path_segment("Address", address)?;
        with_segments(&self.addresses, &[address, "unspents"])
    }

    /// `{addresses}/{address}/names`
    pub fn names_url(&self, address: &str) -> Result<Url> {
        ValidationErrorHandler::validate_path_segment("Address", address)?;
        with_segments(&self.addresses, &[address, "names"])
    }

    /// `{domains}/{domain}/dkim`
    pub fn dkim_url(&self, domain: &str) -> Result<Url> {
        ValidationErrorHandler::validate_path_segment("Domain", domain)?;
        with_segments(&self.domains, &[domain, "dkim"])
    }
}
