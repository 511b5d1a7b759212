//! Handling of the redirect authorization flow.
//!
//! [`authorize`] is called from the application's callback handler with the
//! query Bitly redirected back with. It either tells the application to
//! redirect the user to Bitly (no code yet) or completes the flow by
//! exchanging the code for a token.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::auth::oauth::{authorize, AuthQuery, AuthorizationOutcome};
//!
//! let query = AuthQuery::from_query_string(request_query);
//! match authorize(&http, &config, &query, stored_state.as_ref()).await? {
//!     AuthorizationOutcome::Redirect(redirect) => {
//!         session.set("oauth_state", redirect.state.as_ref());
//!         return Redirect::to(&redirect.auth_url);
//!     }
//!     AuthorizationOutcome::Authorized(token) => {
//!         let client = BitlyClient::new(config, Credential::AccessToken(token));
//!     }
//! }
//! ```

use crate::auth::oauth::auth_query::AuthQuery;
use crate::auth::oauth::begin_auth::{begin_auth, BeginAuthResult};
use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::oauth::token_exchange::exchange_code;
use crate::clients::HttpClient;
use crate::config::{AccessToken, BitlyConfig};

/// What the callback handler should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    /// No code yet: redirect the user to `auth_url`, store `state`, and stop
    /// handling the current request.
    Redirect(BeginAuthResult),
    /// The code was exchanged for an access token.
    Authorized(AccessToken),
}

/// Runs one step of the redirect authorization flow.
///
/// - a provider `error` in the query fails with
///   [`OAuthError::AuthorizationDenied`]
/// - a query without a code yields [`AuthorizationOutcome::Redirect`] and
///   sends nothing over the network
/// - a query with a code is checked against `stored_state` (when one is
///   given) and exchanged via [`exchange_code`]
///
/// # Errors
///
/// - [`OAuthError::AuthorizationDenied`] if the callback carries an `error`
/// - [`OAuthError::StateMismatch`] if the echoed state differs from `stored_state`
/// - [`OAuthError::MissingOAuthConfig`] if OAuth settings are missing
/// - [`OAuthError::HttpError`] if the exchange fails
pub async fn authorize(
    http: &HttpClient,
    config: &BitlyConfig,
    query: &AuthQuery,
    stored_state: Option<&StateParam>,
) -> Result<AuthorizationOutcome, OAuthError> {
    if let Some(error) = query.error.as_deref().filter(|e| !e.is_empty()) {
        tracing::warn!(error = %error, "Bitly authorization was denied");
        return Err(OAuthError::AuthorizationDenied {
            error: error.to_string(),
        });
    }

    let Some(code) = query.code() else {
        return Ok(AuthorizationOutcome::Redirect(begin_auth(config, None)?));
    };

    if let Some(expected) = stored_state {
        let received = query.state.as_deref().unwrap_or_default();
        if !expected.matches(received) {
            return Err(OAuthError::StateMismatch {
                expected: expected.to_string(),
                received: received.to_string(),
            });
        }
    }

    let token = exchange_code(http, config, code).await?;
    Ok(AuthorizationOutcome::Authorized(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_with_base(base: &str) -> BitlyConfig {
        BitlyConfig::builder()
            .api_base_url(BaseUrl::new(base).unwrap())
            .client_id(ClientId::new("cid").unwrap())
            .client_secret(ClientSecret::new("csecret").unwrap())
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_no_code_returns_redirect_without_network() {
        let server = MockServer::start().await;
        let config = config_with_base(&server.uri());
        let http = HttpClient::new(&config);

        let outcome = authorize(&http, &config, &AuthQuery::default(), None)
            .await
            .unwrap();

        match outcome {
            AuthorizationOutcome::Redirect(redirect) => {
                assert!(redirect.auth_url.contains("client_id=cid"));
                assert!(redirect.auth_url.contains("redirect_uri="));
                assert!(redirect.auth_url.contains("state="));
            }
            AuthorizationOutcome::Authorized(_) => panic!("Expected a redirect"),
        }

        let received = server.received_requests().await.unwrap();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_denied() {
        let config = config_with_base("http://127.0.0.1:9");
        let http = HttpClient::new(&config);
        let query = AuthQuery::from_query_string("error=access_denied&state=s");

        let result = authorize(&http, &config, &query, None).await;
        assert!(matches!(
            result,
            Err(OAuthError::AuthorizationDenied { ref error }) if error == "access_denied"
        ));
    }

    #[tokio::test]
    async fn test_state_mismatch_rejected_before_exchange() {
        let server = MockServer::start().await;
        let config = config_with_base(&server.uri());
        let http = HttpClient::new(&config);
        let stored = StateParam::from_raw("expected");

        let result = authorize(&http, &config, &AuthQuery::new("code", "forged"), Some(&stored)).await;
        assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));

        let query = AuthQuery {
            code: Some("code".to_string()),
            ..AuthQuery::default()
        };
        let result = authorize(&http, &config, &query, Some(&stored)).await;
        assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_code_is_exchanged_for_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("access_token=abc123&token_type=bearer"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = config_with_base(&server.uri());
        let http = HttpClient::new(&config);
        let stored = StateParam::from_raw("st");

        let outcome = authorize(&http, &config, &AuthQuery::new("code", "st"), Some(&stored))
            .await
            .unwrap();

        match outcome {
            AuthorizationOutcome::Authorized(token) => assert_eq!(token.as_ref(), "abc123"),
            AuthorizationOutcome::Redirect(_) => panic!("Expected a token"),
        }
    }
}
