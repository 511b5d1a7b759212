//! Configuration error types for the Bitly API client.
//!
//! This module contains the error type used by configuration constructors
//! and validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bitly_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// OAuth client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the client id of your Bitly OAuth app.")]
    EmptyClientId,

    /// OAuth client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret of your Bitly OAuth app.")]
    EmptyClientSecret,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Bitly access token.")]
    EmptyAccessToken,

    /// Username cannot be empty.
    #[error("Username cannot be empty.")]
    EmptyUsername,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api-ssl.bitly.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
