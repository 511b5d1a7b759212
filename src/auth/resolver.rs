//! Per-call authentication resolution.
//!
//! [`resolve`] turns the client's credential and the endpoint's
//! `requires_token` flag into an [`AuthAttachment`] that the request builder
//! merges into the outgoing request.

use thiserror::Error;

use crate::auth::credential::Credential;
use crate::clients::BasicAuth;
use crate::config::AccessToken;

/// What the request builder attaches to a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAttachment {
    /// Send `access_token=<token>` with the parameters.
    AccessToken(AccessToken),
    /// Send an HTTP basic-auth header, outside the body.
    Basic(BasicAuth),
    /// Send nothing.
    None,
}

/// Error returned when a call needs a token the client does not have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Endpoint '{endpoint}' requires an access token, but the client has no credential.")]
pub struct AuthenticationError {
    /// The endpoint that was called.
    pub endpoint: String,
}

/// Decides what authentication to attach to a call.
///
/// - an access token is always attached when present
/// - a password credential becomes a basic-auth pair
/// - an anonymous client may call public endpoints only
///
/// # Errors
///
/// Returns [`AuthenticationError`] for an anonymous credential on an endpoint
/// that requires a token.
///
/// # Example
///
/// ```rust
/// use bitly_api::auth::{resolve, AuthAttachment, Credential};
///
/// let attachment = resolve(&Credential::Anonymous, false, "expand").unwrap();
/// assert_eq!(attachment, AuthAttachment::None);
///
/// assert!(resolve(&Credential::Anonymous, true, "shorten").is_err());
/// ```
pub fn resolve(
    credential: &Credential,
    requires_token: bool,
    endpoint: &str,
) -> Result<AuthAttachment, AuthenticationError> {
    match credential {
        Credential::AccessToken(token) => Ok(AuthAttachment::AccessToken(token.clone())),
        Credential::Password { username, password } => Ok(AuthAttachment::Basic(BasicAuth {
            username: username.clone(),
            password: password.clone(),
        })),
        Credential::Anonymous if requires_token => Err(AuthenticationError {
            endpoint: endpoint.to_string(),
        }),
        Credential::Anonymous => Ok(AuthAttachment::None),
    }
}
