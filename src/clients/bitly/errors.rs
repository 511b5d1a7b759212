//! Error type for [`BitlyClient`](crate::BitlyClient) calls.
//!
//! # Error Handling
//!
//! - [`BitlyError::Authentication`]: The client has no credential for a protected endpoint
//! - [`BitlyError::InvalidRequest`]: The call was rejected before anything was sent
//! - [`BitlyError::Http`]: The request failed in transport, at the API, or in decoding
//!
//! Callers that expect certain API failures (a link that does not exist, for
//! example) can use [`BitlyError::api_error`] to recover from those and
//! propagate everything else.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::{BitlyClient, BitlyError};
//! use bitly_api::clients::Params;
//!
//! match client.call("link_info", Params::new().set("link", "http://bit.ly/zzz")).await {
//!     Ok(data) => println!("Info: {}", data),
//!     Err(e) if e.api_error().is_some_and(|api| api.status_txt == "NOT_FOUND") => {
//!         println!("No such link");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use crate::auth::AuthenticationError;
use crate::clients::{ApiError, HttpError, InvalidRequestError};
use thiserror::Error;

/// Error type for endpoint calls.
///
/// # Example
///
/// ```rust
/// use bitly_api::BitlyError;
/// use bitly_api::clients::{ApiError, HttpError};
///
/// let error = BitlyError::Http(HttpError::Api(ApiError {
///     status_code: 500,
///     status_txt: "INVALID_URI".to_string(),
/// }));
/// assert_eq!(error.api_error().map(|e| e.status_code), Some(500));
/// ```
#[derive(Debug, Error)]
pub enum BitlyError {
    /// The endpoint requires a token and the client has none.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// The call was rejected at the boundary.
    ///
    /// Unknown endpoint or parameter names, values of the wrong kind and
    /// missing required parameters end up here. Nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl BitlyError {
    /// Returns the API error reported by Bitly, if that is what this is.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(HttpError::Api(error)) => Some(error),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a usable HTTP exchange.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(HttpError::Transport(_)))
    }
}

// Verify BitlyError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitlyError>();
};
