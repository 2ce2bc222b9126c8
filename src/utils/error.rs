//! Error handling module
//!
//! Defines the error types returned by the adapter and the API surface

use serde_json::Value;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response was received (connection refused, timeout, DNS or TLS failure)
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was present but is not valid JSON
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request payload could not be encoded
    #[error("Failed to encode request body")]
    Encode(#[source] serde_json::Error),

    /// Response received with a status code outside 200-299
    #[error("{status_code}: {reason}")]
    RequestFailed {
        status_code: u16,
        reason: String,
        /// Raw response content, when the server sent any
        body: Option<String>,
    },

    /// Base address is not a usable http(s) base, or an endpoint could not be joined
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

impl ClientError {
    /// Get HTTP status code, only known for failed requests
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Transport { .. } => "transport_error",
            ClientError::Decode { .. } => "decode_error",
            ClientError::Encode(_) => "encode_error",
            ClientError::RequestFailed { .. } => "request_failed_error",
            ClientError::InvalidUrl { .. } => "invalid_url_error",
            ClientError::Build(_) => "client_build_error",
            ClientError::Config(_) => "config_error",
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, ClientError::RequestFailed { .. })
    }

    /// Whether the transport gave up because the configured timeout elapsed
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Server-supplied error text
    ///
    /// Ollama reports failures as `{"error": "..."}`; falls back to the raw body.
    pub fn server_message(&self) -> Option<String> {
        let ClientError::RequestFailed { body: Some(body), .. } = self else {
            return None;
        };

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => match map.get("error") {
                Some(Value::String(message)) => Some(message.clone()),
                _ => Some(body.clone()),
            },
            _ => Some(body.clone()),
        }
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Error construction helpers
pub mod helpers {
    use super::*;

    /// Create transport error
    pub fn transport_error(message: impl Into<String>, source: reqwest::Error) -> ClientError {
        ClientError::Transport {
            message: message.into(),
            source,
        }
    }

    /// Create decode error
    pub fn decode_error(message: impl Into<String>, source: serde_json::Error) -> ClientError {
        ClientError::Decode {
            message: message.into(),
            source,
        }
    }

    /// Create invalid URL error
    pub fn invalid_url_error(url: impl Into<String>, reason: impl ToString) -> ClientError {
        ClientError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create request failed error
    pub fn request_failed_error(
        status_code: u16,
        reason: impl Into<String>,
        body: Option<String>,
    ) -> ClientError {
        ClientError::RequestFailed {
            status_code,
            reason: reason.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_error_types() {
        assert_eq!(helpers::decode_error("x", json_error()).error_type(), "decode_error");
        assert_eq!(helpers::request_failed_error(500, "Internal Server Error", None).error_type(), "request_failed_error");
        assert_eq!(ClientError::Config(anyhow::anyhow!("bad")).error_type(), "config_error");
    }

    #[test]
    fn test_request_failed_display() {
        let err = helpers::request_failed_error(404, "Not Found", None);
        assert_eq!(err.to_string(), "404: Not Found");
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_request_failed());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_chains_cause() {
        let err = helpers::decode_error("Bad JSON in response", json_error());
        assert!(err.is_decode());
        assert_eq!(err.to_string(), "Bad JSON in response");
        assert!(err.source().is_some());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_server_message() {
        let err = helpers::request_failed_error(
            404,
            "Not Found",
            Some(r#"{"error":"model 'llama9' not found"}"#.to_string()),
        );
        assert_eq!(err.server_message().as_deref(), Some("model 'llama9' not found"));

        let err = helpers::request_failed_error(502, "Bad Gateway", Some("upstream down".to_string()));
        assert_eq!(err.server_message().as_deref(), Some("upstream down"));

        let err = helpers::request_failed_error(500, "Internal Server Error", None);
        assert_eq!(err.server_message(), None);
    }
}
