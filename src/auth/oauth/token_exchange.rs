//! Token exchanges against `/oauth/access_token`.
//!
//! Bitly issues bearer tokens from a single endpoint, reached two ways:
//!
//! - [`exchange_code`]: trades the authorization code from the redirect
//!   callback for a token, authenticating with the app's client credentials.
//! - [`exchange_password`]: trades a username and password (sent as HTTP
//!   basic auth) for a token. This is how a password credential is
//!   bootstrapped.
//!
//! The endpoint may answer with a JSON object, a URL-encoded body or the bare
//! token; every shape is handled by
//! [`decode_token_body`](crate::clients::decode_token_body).

use crate::auth::oauth::error::OAuthError;
use crate::auth::resolver::AuthAttachment;
use crate::clients::{
    decode_token_body, BasicAuth, HttpClient, HttpError, HttpMethod, HttpRequest, Params,
};
use crate::config::{AccessToken, BitlyConfig};

/// Path of the token endpoint.
pub const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";

/// Exchanges an authorization code for an access token.
///
/// Posts `client_id`, `client_secret`, `code` and `redirect_uri` as a form.
///
/// # Errors
///
/// - [`OAuthError::MissingOAuthConfig`] if `client_id`, `client_secret` or
///   `redirect_url` is not configured
/// - [`OAuthError::HttpError`] if the exchange fails or returns no token
///
/// # Example
///
/// ```rust,ignore
/// let http = HttpClient::new(&config);
/// let token = exchange_code(&http, &config, "code-from-callback").await?;
/// ```
pub async fn exchange_code(
    http: &HttpClient,
    config: &BitlyConfig,
    code: &str,
) -> Result<AccessToken, OAuthError> {
    let client_id = config
        .client_id()
        .ok_or(OAuthError::MissingOAuthConfig { field: "client_id" })?;
    let client_secret = config
        .client_secret()
        .ok_or(OAuthError::MissingOAuthConfig {
            field: "client_secret",
        })?;
    let redirect_url = config
        .redirect_url()
        .ok_or(OAuthError::MissingOAuthConfig {
            field: "redirect_url",
        })?;

    let params = Params::new()
        .set("client_id", client_id.as_ref())
        .set("client_secret", client_secret.as_ref())
        .set("code", code)
        .set("redirect_uri", redirect_url.as_ref());

    let request = HttpRequest::build(
        HttpMethod::Post,
        ACCESS_TOKEN_PATH,
        &params,
        &AuthAttachment::None,
    );

    let response = http.send(&request).await?;
    let token = decode_token_body(&response.body)?;

    tracing::info!("Exchanged authorization code for a Bitly access token");
    Ok(token)
}

/// Exchanges a username and password for an access token.
///
/// The credentials travel as HTTP basic auth; the form body carries nothing
/// but `format=json`.
///
/// # Errors
///
/// Returns [`OAuthError::HttpError`] if the exchange fails or returns no token.
pub async fn exchange_password(
    http: &HttpClient,
    username: &str,
    password: &str,
) -> Result<AccessToken, OAuthError> {
    let auth = AuthAttachment::Basic(BasicAuth {
        username: username.to_string(),
        password: password.to_string(),
    });
    Ok(exchange_with_auth(http, &auth).await?)
}

/// Posts to the token endpoint with the given authentication attached.
pub(crate) async fn exchange_with_auth(
    http: &HttpClient,
    auth: &AuthAttachment,
) -> Result<AccessToken, HttpError> {
    let request = HttpRequest::build(HttpMethod::Post, ACCESS_TOKEN_PATH, &Params::new(), auth);

    let response = http.send(&request).await?;
    let token = decode_token_body(&response.body)?;

    tracing::info!("Exchanged password credential for a Bitly access token");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> BitlyConfig {
        BitlyConfig::builder()
            .api_base_url(BaseUrl::new(server.uri()).unwrap())
            .client_id(ClientId::new("cid").unwrap())
            .client_secret(ClientSecret::new("csecret").unwrap())
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_exchange_code_posts_client_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .and(body_string_contains("client_id=cid"))
            .and(body_string_contains("client_secret=csecret"))
            .and(body_string_contains("code=the-code"))
            .and(body_string_contains(
                "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("access_token=abc123&login=bob"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server);
        let http = HttpClient::new(&config);

        let token = exchange_code(&http, &config, "the-code").await.unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[tokio::test]
    async fn test_exchange_code_requires_client_secret() {
        let config = BitlyConfig::builder()
            .client_id(ClientId::new("cid").unwrap())
            .redirect_url(BaseUrl::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap();
        let http = HttpClient::new(&config);

        let result = exchange_code(&http, &config, "code").await;
        assert!(matches!(
            result,
            Err(OAuthError::MissingOAuthConfig {
                field: "client_secret"
            })
        ));
    }

    #[tokio::test]
    async fn test_exchange_password_uses_basic_auth_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            // base64("bob:hunter2")
            .and(header("Authorization", "Basic Ym9iOmh1bnRlcjI="))
            .respond_with(ResponseTemplate::new(200).set_body_string("rawtoken42"))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new(&config_for(&server));
        let token = exchange_password(&http, "bob", "hunter2").await.unwrap();
        assert_eq!(token.as_ref(), "rawtoken42");
    }

    #[tokio::test]
    async fn test_exchange_password_surfaces_envelope_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"status_code":500,"status_txt":"INVALID_LOGIN","data":null}"#,
            ))
            .mount(&server)
            .await;

        let http = HttpClient::new(&config_for(&server));
        let result = exchange_password(&http, "bob", "wrong").await;

        match result {
            Err(OAuthError::HttpError(HttpError::Api(error))) => {
                assert_eq!(error.status_code, 500);
                assert_eq!(error.status_txt, "INVALID_LOGIN");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_http_failure_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("access_token=nope"))
            .mount(&server)
            .await;

        let http = HttpClient::new(&config_for(&server));
        let result = exchange_password(&http, "bob", "pw").await;

        assert!(matches!(
            result,
            Err(OAuthError::HttpError(HttpError::Transport(ref e))) if e.status == Some(401)
        ));
    }
}
