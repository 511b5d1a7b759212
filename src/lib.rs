//! # Bitly API Rust Client
//!
//! A Rust client for the Bitly v3 link-shortening API, providing type-safe
//! configuration, authentication handling, and a validated endpoint catalog.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BitlyConfig`] and [`BitlyConfigBuilder`]
//! - Validated newtypes for OAuth credentials, tokens and URLs
//! - A catalog of the v3 endpoints with per-parameter validation and defaults
//!   via [`endpoints`]
//! - Three credential modes: anonymous, access token, and username/password
//!   exchanged once for a token
//! - The OAuth 2.0 web flow (redirect and code exchange) via [`auth::oauth`]
//! - An async HTTP client that decodes Bitly's `status_code`/`data` envelope
//!
//! ## Quick Start
//!
//! ```rust
//! use bitly_api::{BitlyConfig, ClientId, ClientSecret, BaseUrl};
//!
//! // Create configuration using the builder pattern
//! let config = BitlyConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .redirect_url(BaseUrl::new("https://your-app.com/callback").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Calling Endpoints
//!
//! ```rust,ignore
//! use bitly_api::{BitlyClient, BitlyConfig};
//! use bitly_api::auth::Credential;
//! use bitly_api::clients::Params;
//! use bitly_api::endpoints::TimeUnit;
//!
//! let client = BitlyClient::new(BitlyConfig::default(), Credential::access_token("token")?);
//!
//! // By catalog name
//! let data = client
//!     .call("link_clicks", Params::new().set("link", "http://bit.ly/abc").set("unit", TimeUnit::Week))
//!     .await?;
//!
//! // Or through the generated method of the same name
//! let data = client.link_clicks(Params::new().set("link", "http://bit.ly/abc")).await?;
//! ```
//!
//! ## Password Credentials
//!
//! A username/password credential is exchanged for an access token on the
//! first call. The exchange happens once per client:
//!
//! ```rust,ignore
//! use bitly_api::{BitlyClient, BitlyConfig};
//! use bitly_api::auth::Credential;
//!
//! let client = BitlyClient::new(BitlyConfig::default(), Credential::password("bob", "hunter2")?);
//! let info = client.user_info(Default::default()).await?;
//! ```
//!
//! ## OAuth Authentication
//!
//! For web apps acting on behalf of Bitly users:
//!
//! ```rust,ignore
//! use bitly_api::auth::oauth::{authorize, AuthQuery, AuthorizationOutcome};
//!
//! let query = AuthQuery::from_query_string(request_query);
//! match authorize(client.http_client(), &config, &query, stored_state.as_ref()).await? {
//!     AuthorizationOutcome::Redirect(result) => {
//!         // Store result.state, then redirect the user to result.auth_url
//!     }
//!     AuthorizationOutcome::Authorized(token) => {
//!         // token is ready for Credential::AccessToken
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Arguments are checked before anything is sent
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, BitlyConfig, BitlyConfigBuilder, ClientId, ClientSecret};
pub use error::ConfigError;

// Re-export the client types
pub use clients::{BitlyClient, BitlyError, HttpClient, HttpError, Params};

// Re-export credential types for convenience
pub use auth::Credential;
