//! OAuth 2.0 for Bitly apps.
//!
//! Bitly issues bearer tokens through two grants, both ending at
//! `/oauth/access_token`:
//!
//! # Authorization Code Grant
//!
//! 1. **Authorization Initiation** ([`begin_auth`]): Generate the URL of
//!    Bitly's authorization page and redirect the user there.
//!
//! 2. **Callback Handling** ([`authorize`]): When the user is redirected
//!    back, verify the state and exchange the code for an access token. When
//!    the callback carries no code yet, [`authorize`] returns the redirect to
//!    perform instead.
//!
//! # Password Grant
//!
//! [`exchange_password`] trades a username and password (sent as HTTP basic
//! auth) for a token. A [`BitlyClient`](crate::BitlyClient) built with
//! [`Credential::Password`](crate::auth::Credential::Password) performs this
//! exchange on its own, once, before its first call.
//!
//! # Security Features
//!
//! - **CSRF Protection**: The state parameter ties the callback to the
//!   redirect that started it
//! - **Constant-Time Comparison**: States are compared with
//!   [`constant_time_compare`]
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::{BitlyConfig, BaseUrl, ClientId, ClientSecret};
//! use bitly_api::auth::oauth::{authorize, AuthQuery, AuthorizationOutcome, OAuthError, StateParam};
//! use bitly_api::clients::HttpClient;
//!
//! let config = BitlyConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .redirect_url(BaseUrl::new("https://your-app.com/auth/callback").unwrap())
//!     .build()
//!     .unwrap();
//! let http = HttpClient::new(&config);
//!
//! async fn handle_callback(
//!     http: &HttpClient,
//!     config: &BitlyConfig,
//!     query: AuthQuery,
//!     stored_state: Option<StateParam>,
//! ) -> Result<(), OAuthError> {
//!     match authorize(http, config, &query, stored_state.as_ref()).await? {
//!         AuthorizationOutcome::Redirect(redirect) => {
//!             // store redirect.state, then redirect to redirect.auth_url
//!         }
//!         AuthorizationOutcome::Authorized(token) => {
//!             // persist the token
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod auth_query;
mod begin_auth;
mod callback;
mod error;
mod state;
mod token_exchange;

pub use auth_query::AuthQuery;
pub use begin_auth::{begin_auth, BeginAuthResult};
pub use callback::{authorize, AuthorizationOutcome};
pub use error::OAuthError;
pub use state::{constant_time_compare, StateParam};
pub use token_exchange::{exchange_code, exchange_password, ACCESS_TOKEN_PATH};

pub(crate) use token_exchange::exchange_with_auth;
