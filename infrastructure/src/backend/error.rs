//! Error types for the HTTP backend adapter

use orderchat_application::GatewayError;
use thiserror::Error;

/// Result type alias for backend HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur when talking to the backend over HTTP
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Decode { error: String, raw: String },
}

impl From<HttpError> for GatewayError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Request(e) if e.is_timeout() => GatewayError::Timeout,
            HttpError::Request(e) => GatewayError::Connection(e.to_string()),
            HttpError::InvalidBaseUrl { url, reason } => {
                GatewayError::Connection(format!("invalid backend URL '{}': {}", url, reason))
            }
            HttpError::Status { status, body } => GatewayError::Status { status, body },
            HttpError::Decode { error, .. } => GatewayError::Decode(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_gateway_status() {
        let error: GatewayError = HttpError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }
        .into();
        assert!(matches!(error, GatewayError::Status { status: 502, .. }));
    }

    #[test]
    fn test_decode_keeps_parse_message_only() {
        let error: GatewayError = HttpError::Decode {
            error: "missing field `response`".to_string(),
            raw: "{}".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Could not decode backend response: missing field `response`"
        );
    }
}
