//! Integration tests for the OAuth flows.
//!
//! These tests cover the redirect authorization flow end to end and the
//! one-time exchange of a password credential for an access token.

use bitly_api::auth::oauth::{AuthQuery, AuthorizationOutcome, OAuthError, StateParam};
use bitly_api::auth::Credential;
use bitly_api::{BaseUrl, BitlyClient, BitlyConfig, BitlyError, ClientId, ClientSecret, Params};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an OAuth-enabled configuration pointed at the mock server
fn create_oauth_config(server: &MockServer) -> BitlyConfig {
    BitlyConfig::builder()
        .api_base_url(BaseUrl::new(server.uri()).unwrap())
        .authorize_url(BaseUrl::new("https://bitly.com/oauth/authorize").unwrap())
        .client_id(ClientId::new("test-client-id").unwrap())
        .client_secret(ClientSecret::new("test-client-secret").unwrap())
        .redirect_url(BaseUrl::new("https://app.example.com/callback").unwrap())
        .build()
        .unwrap()
}

fn user_info_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status_code": 200,
        "status_txt": "OK",
        "data": {"login": "bob"},
    }))
}

// === Redirect flow ===

#[tokio::test]
async fn test_complete_redirect_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .and(body_string_contains("client_id=test-client-id"))
        .and(body_string_contains("client_secret=test-client-secret"))
        .and(body_string_contains("code=the-code"))
        .and(body_string_contains(
            "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("access_token=issued-token&login=bob&apiKey=R_123"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = BitlyClient::new(create_oauth_config(&server), Credential::Anonymous);

    // First visit: no code, so the client is told to redirect
    let outcome = client
        .authorize(&AuthQuery::from_query_string(""), None)
        .await
        .unwrap();
    let AuthorizationOutcome::Redirect(redirect) = outcome else {
        panic!("Expected a redirect, got: {outcome:?}");
    };
    assert!(redirect
        .auth_url
        .starts_with("https://bitly.com/oauth/authorize?client_id=test-client-id"));
    assert!(redirect
        .auth_url
        .contains(&format!("state={}", redirect.state)));
    assert!(server.received_requests().await.unwrap().is_empty());

    // Bitly redirects back with the code and the echoed state
    let callback = format!("?code=the-code&state={}", redirect.state);
    let outcome = client
        .authorize(
            &AuthQuery::from_query_string(&callback),
            Some(&redirect.state),
        )
        .await
        .unwrap();

    match outcome {
        AuthorizationOutcome::Authorized(token) => assert_eq!(token.as_ref(), "issued-token"),
        other => panic!("Expected a token, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_state_mismatch_sends_nothing() {
    let server = MockServer::start().await;
    let client = BitlyClient::new(create_oauth_config(&server), Credential::Anonymous);

    let stored = StateParam::from_raw("expected-state");
    let result = client
        .authorize(&AuthQuery::new("the-code", "forged-state"), Some(&stored))
        .await;

    assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_denied_authorization() {
    let server = MockServer::start().await;
    let client = BitlyClient::new(create_oauth_config(&server), Credential::Anonymous);

    let query = AuthQuery::from_query_string("error=access_denied&code=ignored");
    let result = client.authorize(&query, None).await;

    match result {
        Err(OAuthError::AuthorizationDenied { error }) => assert_eq!(error, "access_denied"),
        other => panic!("Expected AuthorizationDenied, got: {other:?}"),
    }
}

// === Password bootstrap ===

#[tokio::test]
async fn test_password_credential_is_exchanged_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .and(header("authorization", "Basic Ym9iOmh1bnRlcjI="))
        .respond_with(ResponseTemplate::new(200).set_body_string("exchanged-token"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/user/info"))
        .and(query_param("access_token", "exchanged-token"))
        .respond_with(user_info_response())
        .expect(3)
        .mount(&server)
        .await;

    let client = BitlyClient::new(
        create_oauth_config(&server),
        Credential::password("bob", "hunter2").unwrap(),
    );

    let (first, second) = tokio::join!(
        client.user_info(Params::new()),
        client.user_info(Params::new())
    );
    assert_eq!(first.unwrap()["login"], "bob");
    assert_eq!(second.unwrap()["login"], "bob");

    client.user_info(Params::new()).await.unwrap();

    let token = client.access_token().await.unwrap().unwrap();
    assert_eq!(token.as_ref(), "exchanged-token");
}

#[tokio::test]
async fn test_failed_password_exchange_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "second-try",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/user/info"))
        .and(query_param("access_token", "second-try"))
        .respond_with(user_info_response())
        .expect(1)
        .mount(&server)
        .await;

    let client = BitlyClient::new(
        create_oauth_config(&server),
        Credential::password("bob", "hunter2").unwrap(),
    );

    let error = client.user_info(Params::new()).await.unwrap_err();
    assert!(matches!(error, BitlyError::Http(_)));
    assert!(error.is_transport());

    let data = client.user_info(Params::new()).await.unwrap();
    assert_eq!(data["login"], "bob");
}

#[tokio::test]
async fn test_password_credential_authenticates_public_endpoints_too() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("access_token=tok"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/expand"))
        .and(query_param("access_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status_code": 200,
            "status_txt": "OK",
            "data": {"expand": [{"long_url": "https://example.com/"}]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BitlyClient::new(
        create_oauth_config(&server),
        Credential::password("bob", "hunter2").unwrap(),
    );

    let long = client.expand_url("http://bit.ly/abc").await.unwrap();
    assert_eq!(long, "https://example.com/");
}
