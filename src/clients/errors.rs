//! Error types for the request pipeline.
//!
//! # Error Handling
//!
//! - [`TransportError`]: Network failure or non-2xx HTTP status
//! - [`ApiError`]: Well-formed envelope reporting a non-200 application status
//! - [`DecodeError`]: Response body could not be decoded
//! - [`InvalidRequestError`]: Call rejected at the boundary before sending
//! - [`HttpError`]: Unified error for everything after a request is built
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::clients::HttpError;
//!
//! match client.send(request).await.and_then(|r| r.into_data()) {
//!     Ok(data) => println!("Data: {}", data),
//!     Err(HttpError::Api(e)) => println!("Bitly said {}: {}", e.status_code, e.status_txt),
//!     Err(HttpError::Transport(e)) => println!("Transport failure: {}", e),
//!     Err(HttpError::Decode(e)) => println!("Unreadable body: {}", e),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned when the request never produced a successful HTTP exchange.
///
/// Either the transport failed outright (DNS, TLS, timeout, connection
/// refused), in which case `status` is `None`, or the server answered with a
/// non-2xx status. The response body is never inspected.
///
/// ```rust
/// use bitly_api::clients::TransportError;
///
/// let error = TransportError::status(503);
/// assert_eq!(error.to_string(), "HTTP request failed with status 503");
///
/// let error = TransportError::no_response("connection refused");
/// assert_eq!(error.to_string(), "HTTP request failed with no response: connection refused");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// The HTTP status code, or `None` when no response was received.
    pub status: Option<u16>,
    /// Generic description of the failure.
    pub message: String,
}

impl TransportError {
    /// Creates an error for a non-2xx HTTP status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: format!("HTTP request failed with status {status}"),
        }
    }

    /// Creates an error for a failure where no response was received.
    #[must_use]
    pub fn no_response(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(_) => f.write_str(&self.message),
            None => write!(f, "HTTP request failed with no response: {}", self.message),
        }
    }
}

/// Error reported by Bitly inside a well-formed response envelope.
///
/// The status code and text are carried verbatim from the provider.
///
/// ```rust
/// use bitly_api::clients::ApiError;
///
/// let error = ApiError { status_code: 500, status_txt: "INVALID_URI".to_string() };
/// assert_eq!(error.to_string(), "Bitly API error 500: INVALID_URI");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Bitly API error {status_code}: {status_txt}")]
pub struct ApiError {
    /// The `status_code` field of the envelope.
    pub status_code: i64,
    /// The `status_txt` field of the envelope.
    pub status_txt: String,
}

/// Error returned when a response body cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response: {message}")]
pub struct DecodeError {
    /// Description of what could not be decoded.
    pub message: String,
}

/// Error returned when a call is rejected before anything is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The endpoint name is not in the catalog.
    #[error("Unknown endpoint '{name}'.")]
    UnknownEndpoint {
        /// The name that was looked up.
        name: String,
    },

    /// A parameter name is not declared for the endpoint.
    #[error("Endpoint '{endpoint}' does not accept parameter '{name}'.")]
    UnknownParameter {
        /// The endpoint being called.
        endpoint: &'static str,
        /// The rejected parameter name.
        name: String,
    },

    /// A parameter value does not fit the declared kind.
    #[error("Invalid value {value} for parameter '{name}' of endpoint '{endpoint}': expected {expected}.")]
    InvalidValue {
        /// The endpoint being called.
        endpoint: &'static str,
        /// The parameter name.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What the parameter accepts.
        expected: String,
    },

    /// A required parameter was not supplied.
    #[error("Endpoint '{endpoint}' requires parameter '{name}'.")]
    MissingParameter {
        /// The endpoint being called.
        endpoint: &'static str,
        /// The missing parameter name.
        name: &'static str,
    },
}

/// Unified error type for a sent request.
///
/// Covers the three terminal failure states of a call once it has left the
/// request builder.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network failure or non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Envelope reported a non-200 application status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

// Verify errors are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<InvalidRequestError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_keeps_status_code() {
        let error = TransportError::status(404);
        assert_eq!(error.status, Some(404));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_transport_error_without_response() {
        let error = TransportError::no_response("request timed out");
        assert_eq!(error.status, None);
        assert!(error.to_string().contains("no response"));
        assert!(error.to_string().contains("request timed out"));
    }

    #[test]
    fn test_api_error_carries_provider_text_verbatim() {
        let error = ApiError {
            status_code: 404,
            status_txt: "NOT_FOUND".to_string(),
        };
        assert!(error.to_string().ends_with("NOT_FOUND"));
    }

    #[test]
    fn test_invalid_request_messages() {
        let error = InvalidRequestError::UnknownParameter {
            endpoint: "shorten",
            name: "longurl".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Endpoint 'shorten' does not accept parameter 'longurl'."
        );

        let error = InvalidRequestError::MissingParameter {
            endpoint: "expand",
            name: "shortUrl",
        };
        assert!(error.to_string().contains("requires parameter 'shortUrl'"));
    }

    #[test]
    fn test_http_error_from_conversions() {
        let error: HttpError = TransportError::status(500).into();
        assert!(matches!(error, HttpError::Transport(_)));

        let error: HttpError = ApiError {
            status_code: 403,
            status_txt: "RATE_LIMIT_EXCEEDED".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::Api(_)));

        let error: HttpError = DecodeError {
            message: "bad".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::Decode(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &TransportError::status(502);
        let _: &dyn std::error::Error = &InvalidRequestError::UnknownEndpoint {
            name: "x".to_string(),
        };
    }
}
