//! Error types and handlers for registry operations

pub mod handlers;

use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Coarse classification of a failure below the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Dns,
    Tls,
    /// Headers arrived but the body could not be read
    Body,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportKind::Timeout => "timeout",
            TransportKind::Connect => "connection",
            TransportKind::Dns => "dns",
            TransportKind::Tls => "tls",
            TransportKind::Body => "body",
            TransportKind::Other => "network",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Client used before credentials were set
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network-level failure; `body` holds whatever the server managed to send
    #[error("Transport error ({kind}): {message}")]
    Transport {
        kind: TransportKind,
        message: String,
        body: Option<Value>,
    },

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Protocol {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// A 2xx response carried no body
    #[error("Empty response body from {0}")]
    EmptyBody(String),

    /// The body was not valid JSON or did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl RegistryError {
    /// Partial or error body delivered alongside the failure, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            RegistryError::Transport { body, .. } | RegistryError::Protocol { body, .. } => {
                body.as_ref()
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, RegistryError::Configuration(_))
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for RegistryError {
    fn from(err: url::ParseError) -> Self {
        RegistryError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        handlers::NetworkErrorHandler::handle_network_error(&err, "request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_messages() {
        assert_eq!(
            RegistryError::Configuration("credentials not set".to_string()).to_string(),
            "Configuration error: credentials not set"
        );
        let err = RegistryError::Protocol {
            status: 404,
            message: "Resource not found for user lookup".to_string(),
            body: None,
        };
        assert_eq!(err.to_string(), "HTTP 404: Resource not found for user lookup");
        let err = RegistryError::Transport {
            kind: TransportKind::Timeout,
            message: "search timeout".to_string(),
            body: None,
        };
        assert_eq!(err.to_string(), "Transport error (timeout): search timeout");
    }

    #[test]
    fn body_is_exposed_for_transport_and_protocol() {
        let body = json!({"error": "rate limited"});
        let err = RegistryError::Transport {
            kind: TransportKind::Other,
            message: "reset".to_string(),
            body: Some(body.clone()),
        };
        assert_eq!(err.body(), Some(&body));
        assert_eq!(err.status(), None);

        let err = RegistryError::Protocol {
            status: 401,
            message: "unauthorized".to_string(),
            body: Some(json!({})),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(&json!({})));

        assert!(RegistryError::Parse("bad".to_string()).body().is_none());
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let err: RegistryError = serde_json::from_str::<Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, RegistryError::Parse(_)));
    }
}
