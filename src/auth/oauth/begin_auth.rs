//! OAuth authorization URL generation.
//!
//! [`begin_auth`] is the first step of the redirect flow. It produces the URL
//! of Bitly's authorization page and the state parameter the application must
//! keep until the callback arrives.
//!
//! # Example
//!
//! ```rust
//! use bitly_api::{BitlyConfig, BaseUrl, ClientId};
//! use bitly_api::auth::oauth::begin_auth;
//!
//! let config = BitlyConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .redirect_url(BaseUrl::new("https://myapp.example.com/callback").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let result = begin_auth(&config, None).unwrap();
//! assert!(result.auth_url.starts_with("https://bitly.com/oauth/authorize?client_id=my-client-id"));
//! assert!(result.auth_url.contains("redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback"));
//! assert!(result.auth_url.ends_with(&format!("state={}", result.state)));
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::config::BitlyConfig;

/// Result of initiating OAuth authorization.
///
/// # Important
///
/// The `state` value **must** be stored by your application and passed to
/// [`authorize`](crate::auth::oauth::authorize) when handling the callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeginAuthResult {
    /// The full authorization URL to redirect the user to.
    pub auth_url: String,

    /// The state parameter sent with this authorization request.
    pub state: StateParam,
}

/// Builds the authorization redirect.
///
/// A fresh [`StateParam`] is generated unless `state` is given.
///
/// # Errors
///
/// Returns [`OAuthError::MissingOAuthConfig`] if `client_id` or
/// `redirect_url` is not configured.
pub fn begin_auth(
    config: &BitlyConfig,
    state: Option<StateParam>,
) -> Result<BeginAuthResult, OAuthError> {
    let client_id = config
        .client_id()
        .ok_or(OAuthError::MissingOAuthConfig { field: "client_id" })?;
    let redirect_url = config
        .redirect_url()
        .ok_or(OAuthError::MissingOAuthConfig {
            field: "redirect_url",
        })?;

    let state = state.unwrap_or_default();

    let auth_url = format!(
        "{}?client_id={}&redirect_uri={}&state={}",
        config.authorize_url(),
        urlencoding::encode(client_id.as_ref()),
        urlencoding::encode(redirect_url.as_ref()),
        urlencoding::encode(state.as_ref())
    );

    Ok(BeginAuthResult { auth_url, state })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId};

    fn oauth_config() -> BitlyConfig {
        BitlyConfig::builder()
            .client_id(ClientId::new("cid").unwrap())
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_auth_url_has_client_id_redirect_and_state() {
        let result = begin_auth(&oauth_config(), None).unwrap();

        assert!(result.auth_url.starts_with("https://bitly.com/oauth/authorize?"));
        assert!(result.auth_url.contains("client_id=cid"));
        assert!(result
            .auth_url
            .contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb"));
        assert!(result
            .auth_url
            .contains(&format!("state={}", result.state.as_ref())));
    }

    #[test]
    fn test_supplied_state_is_used_and_encoded() {
        let result = begin_auth(&oauth_config(), Some(StateParam::from_raw("a b"))).unwrap();
        assert_eq!(result.state.as_ref(), "a b");
        assert!(result.auth_url.ends_with("state=a%20b"));
    }

    #[test]
    fn test_custom_authorize_url() {
        let config = BitlyConfig::builder()
            .client_id(ClientId::new("cid").unwrap())
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .authorize_url(BaseUrl::new("http://localhost:8080/oauth/authorize").unwrap())
            .build()
            .unwrap();

        let result = begin_auth(&config, None).unwrap();
        assert!(result
            .auth_url
            .starts_with("http://localhost:8080/oauth/authorize?client_id=cid"));
    }

    #[test]
    fn test_missing_client_id() {
        let config = BitlyConfig::builder()
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap();

        assert!(matches!(
            begin_auth(&config, None),
            Err(OAuthError::MissingOAuthConfig { field: "client_id" })
        ));
    }

    #[test]
    fn test_missing_redirect_url() {
        let config = BitlyConfig::builder()
            .client_id(ClientId::new("cid").unwrap())
            .build()
            .unwrap();

        assert!(matches!(
            begin_auth(&config, None),
            Err(OAuthError::MissingOAuthConfig {
                field: "redirect_url"
            })
        ));
    }
}
