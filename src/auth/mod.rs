//! Authentication types for the Bitly API client.
//!
//! # Overview
//!
//! - [`Credential`]: What a client authenticates with (nothing, a token, or a
//!   username and password)
//! - [`resolve`]: Decides per call what to attach to the request
//! - [`AuthAttachment`]: The outcome of [`resolve`]
//! - [`oauth`]: Redirect authorization flow and token exchanges
//!
//! # Example
//!
//! ```rust
//! use bitly_api::auth::{resolve, AuthAttachment, Credential};
//!
//! let credential = Credential::access_token("my-token").unwrap();
//! let attachment = resolve(&credential, true, "shorten").unwrap();
//! assert!(matches!(attachment, AuthAttachment::AccessToken(_)));
//! ```

mod credential;
pub mod oauth;
mod resolver;

pub use credential::Credential;
pub use resolver::{resolve, AuthAttachment, AuthenticationError};
