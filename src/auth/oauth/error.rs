//! OAuth-specific error types for the Bitly API client.
//!
//! This module contains error types for the redirect authorization flow and
//! the token exchanges.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingOAuthConfig`]: A required OAuth setting is not configured
//! - [`OAuthError::StateMismatch`]: OAuth state parameter doesn't match expected
//! - [`OAuthError::AuthorizationDenied`]: The user or Bitly refused the authorization
//! - [`OAuthError::HttpError`]: Wrapped request pipeline error
//!
//! # Example
//!
//! ```rust
//! use bitly_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::MissingOAuthConfig { field: "redirect_url" };
//! assert!(error.to_string().contains("redirect_url"));
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
///
/// # Example
///
/// ```rust
/// use bitly_api::auth::oauth::OAuthError;
///
/// fn handle_oauth_error(err: OAuthError) {
///     match err {
///         OAuthError::MissingOAuthConfig { field } => {
///             eprintln!("Configuration error: {} is not set", field);
///         }
///         OAuthError::StateMismatch { expected, received } => {
///             eprintln!("CSRF: State mismatch - expected {}, got {}", expected, received);
///         }
///         OAuthError::AuthorizationDenied { error } => {
///             eprintln!("Authorization denied: {}", error);
///         }
///         OAuthError::HttpError(e) => {
///             eprintln!("Token exchange failed: {}", e);
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// A setting the OAuth flow needs is missing from `BitlyConfig`.
    ///
    /// `begin_auth()` needs `client_id` and `redirect_url`; the code exchange
    /// additionally needs `client_secret`.
    #[error("'{field}' must be configured in BitlyConfig for OAuth")]
    MissingOAuthConfig {
        /// The name of the missing setting.
        field: &'static str,
    },

    /// OAuth state parameter mismatch.
    ///
    /// The state parameter in the callback does not match the state that was
    /// generated during `begin_auth()`. This is a security measure against
    /// CSRF attacks.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The expected state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// The provider redirected back with an `error` instead of a code.
    #[error("Authorization was denied: {error}")]
    AuthorizationDenied {
        /// The `error` value from the callback query.
        error: String,
    },

    /// Wrapped request pipeline error.
    ///
    /// The token exchange failed at the transport level, Bitly rejected it,
    /// or the response carried no token.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
