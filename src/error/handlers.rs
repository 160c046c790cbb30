//! Standardized error mapping for HTTP statuses, network failures and input checks

use crate::error::{RegistryError, Result, TransportKind};
use serde_json::Value;

/// Standard error handler for HTTP responses
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Map a non-2xx status to a protocol error, keeping the parsed body
    pub fn handle_status(status: u16, body: Option<Value>, operation: &str) -> RegistryError {
        let detail = body
            .as_ref()
            .and_then(Self::error_text)
            .unwrap_or_default();

        let message = match status {
            400 => format!("Bad request for {}", operation),
            401 => format!("Unauthorized to perform {}, check app id and secret", operation),
            403 => format!("Forbidden: insufficient permissions for {}", operation),
            404 => format!("Resource not found for {}", operation),
            429 => format!("Rate limited during {}", operation),
            500 => format!("Registry server error during {}", operation),
            502 | 503 => format!("Registry unavailable for {}", operation),
            504 => format!("Registry gateway timeout during {}", operation),
            _ => format!("{} failed (status {})", operation, status),
        };

        let message = if detail.is_empty() {
            message
        } else {
            format!("{}: {}", message, detail)
        };

        RegistryError::Protocol {
            status,
            message,
            body,
        }
    }

    /// Pull a human-readable message out of a registry error body
    fn error_text(body: &Value) -> Option<String> {
        match body {
            Value::String(text) => Some(text.clone()),
            Value::Object(map) => {
                let error = map.get("error")?;
                match error {
                    Value::String(text) => Some(text.clone()),
                    Value::Object(inner) => inner
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    pub fn classify(error: &reqwest::Error) -> TransportKind {
        let text = error.to_string().to_lowercase();
        if error.is_timeout() {
            TransportKind::Timeout
        } else if text.contains("dns") {
            TransportKind::Dns
        } else if text.contains("certificate") || text.contains("tls") {
            TransportKind::Tls
        } else if error.is_connect() {
            TransportKind::Connect
        } else if error.is_body() || error.is_decode() {
            TransportKind::Body
        } else {
            TransportKind::Other
        }
    }

    /// Categorize and format network errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> RegistryError {
        let kind = Self::classify(error);
        let message = match kind {
            TransportKind::Timeout => format!("{} timeout: {}", context, error),
            TransportKind::Connect => format!("Connection error during {}: {}", context, error),
            TransportKind::Dns => format!("DNS resolution error for {}: {}", context, error),
            TransportKind::Tls => format!("TLS certificate error during {}: {}", context, error),
            TransportKind::Body => format!("Failed to read {} response: {}", context, error),
            TransportKind::Other => format!("{} network error: {}", context, error),
        };

        RegistryError::Transport {
            kind,
            message,
            body: None,
        }
    }
}

/// Validation error utilities
pub struct ValidationErrorHandler;

impl ValidationErrorHandler {
    /// Reject empty path parameters before a request is built
    pub fn validate_segment(name: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(RegistryError::Validation(format!("{} cannot be empty", name)));
        }
        Ok(())
    }

    /// Like `validate_segment`, but also rejects `.` and `..`, which URL
    /// normalization would drop from the path instead of sending
    pub fn validate_path_segment(name: &str, value: &str) -> Result<()> {
        Self::validate_segment(name, value)?;
        if value == "." || value == ".." {
            return Err(RegistryError::Validation(format!(
                "{} cannot be a relative path segment: '{}'",
                name, value
            )));
        }
        Ok(())
    }

    pub fn validate_usernames<S: AsRef<str>>(usernames: &[S]) -> Result<()> {
        if usernames.is_empty() {
            return Err(RegistryError::Validation(
                "At least one username is required".to_string(),
            ));
        }
        for username in usernames {
            Self::validate_path_segment("Username", username.as_ref())?;
        }
        Ok(())
    }

    pub fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(RegistryError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if timeout > 86400 {
            return Err(RegistryError::Validation(
                "Timeout cannot exceed 24 hours (86400 seconds)".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_maps_to_protocol_error() {
        let err = HttpErrorHandler::handle_status(404, Some(json!({})), "user lookup");
        match err {
            RegistryError::Protocol { status, message, body } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Resource not found for user lookup");
                assert_eq!(body, Some(json!({})));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn status_message_includes_server_error_text() {
        let err = HttpErrorHandler::handle_status(
            429,
            Some(json!({"error": "rate limited"})),
            "search",
        );
        assert_eq!(err.to_string(), "HTTP 429: Rate limited during search: rate limited");

        let err = HttpErrorHandler::handle_status(
            401,
            Some(json!({"error": {"type": "auth", "message": "bad secret"}})),
            "all users",
        );
        assert!(err.to_string().ends_with("bad secret"));
    }

    #[test]
    fn unknown_status_falls_back_to_generic_message() {
        let err = HttpErrorHandler::handle_status(418, None, "dkim lookup");
        assert_eq!(err.to_string(), "HTTP 418: dkim lookup failed (status 418)");
    }

    #[test]
    fn usernames_validation() {
        assert!(ValidationErrorHandler::validate_usernames(&["bob.id"]).is_ok());
        assert!(ValidationErrorHandler::validate_usernames::<&str>(&[]).is_err());
        assert!(ValidationErrorHandler::validate_usernames(&["bob.id", " "]).is_err());
    }

    #[test]
    fn dot_segments_are_not_path_parameters() {
        for value in [".", ".."] {
            let err = ValidationErrorHandler::validate_path_segment("Address", value).unwrap_err();
            assert!(matches!(err, RegistryError::Validation(_)));
            assert!(ValidationErrorHandler::validate_usernames(&[value]).is_err());
        }
        assert!(ValidationErrorHandler::validate_path_segment("Domain", ".well-known").is_ok());
        assert!(ValidationErrorHandler::validate_path_segment("Domain", "...").is_ok());
        assert!(ValidationErrorHandler::validate_segment("Search query", ".").is_ok());
    }

    #[test]
    fn timeout_validation() {
        assert!(ValidationErrorHandler::validate_timeout(30).is_ok());
        assert!(ValidationErrorHandler::validate_timeout(0).is_err());
        assert!(ValidationErrorHandler::validate_timeout(86401).is_err());
    }
}
