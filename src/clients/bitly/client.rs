//! The endpoint dispatcher.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::OnceCell;

use crate::auth::oauth::{self, exchange_with_auth, AuthQuery, AuthorizationOutcome, OAuthError};
use crate::auth::oauth::{StateParam, ACCESS_TOKEN_PATH};
use crate::auth::{resolve, AuthAttachment, Credential};
use crate::clients::bitly::errors::BitlyError;
use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::params::Params;
use crate::clients::transport::Transport;
use crate::config::{AccessToken, BitlyConfig};
use crate::endpoints::{self, EndpointDef};

/// Client for the Bitly v3 API.
///
/// Every call goes through the same pipeline:
///
/// 1. look up the endpoint in the [catalog](crate::endpoints)
/// 2. validate the arguments and merge them over the declared defaults
/// 3. resolve authentication for the call
/// 4. build, send and decode the request
///
/// Nothing is sent when steps 1 to 3 fail.
///
/// # Credentials
///
/// A client keeps the [`Credential`] it was created with. A
/// [`Credential::Password`] is exchanged for an access token on first use;
/// the exchange runs at most once per client, even under concurrent first
/// calls, and its token is reused for every later call. A failed exchange is
/// not cached, so a later call tries again.
///
/// # Thread Safety
///
/// `BitlyClient` is `Send + Sync`; share it behind an `Arc` to call it from
/// several tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bitly_api::{BitlyClient, BitlyConfig};
/// use bitly_api::auth::Credential;
/// use bitly_api::clients::Params;
///
/// let client = BitlyClient::new(
///     BitlyConfig::default(),
///     Credential::access_token("your-token")?,
/// );
///
/// let short = client.shorten_url("https://example.com/a/long/path").await?;
///
/// let clicks = client
///     .call("link_clicks", Params::new().set("link", short.as_str()).set("unit", "week"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct BitlyClient {
    config: BitlyConfig,
    http: HttpClient,
    credential: Credential,
    exchanged_token: OnceCell<AccessToken>,
}

// Verify BitlyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitlyClient>();
};

impl BitlyClient {
    /// Creates a client using the default reqwest transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: BitlyConfig, credential: Credential) -> Self {
        let http = HttpClient::new(&config);
        Self::from_parts(config, http, credential)
    }

    /// Creates a client sending through the given transport.
    #[must_use]
    pub fn with_transport(
        config: BitlyConfig,
        credential: Credential,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let http = HttpClient::with_transport(&config, transport);
        Self::from_parts(config, http, credential)
    }

    fn from_parts(config: BitlyConfig, http: HttpClient, credential: Credential) -> Self {
        Self {
            config,
            http,
            credential,
            exchanged_token: OnceCell::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BitlyConfig {
        &self.config
    }

    /// Returns the credential the client was created with.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Calls an endpoint by its catalog name and returns the envelope's `data`.
    ///
    /// # Errors
    ///
    /// - [`BitlyError::InvalidRequest`] for an unknown endpoint or bad arguments
    /// - [`BitlyError::Authentication`] if the endpoint needs a token and the
    ///   client is anonymous
    /// - [`BitlyError::Http`] if the request fails, Bitly reports an error, or
    ///   the response cannot be decoded
    pub async fn call(&self, name: &str, params: Params) -> Result<Value, BitlyError> {
        let endpoint = endpoints::find(name)?;
        self.call_endpoint(endpoint, &params).await
    }

    /// Calls the given endpoint definition.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn call_endpoint(
        &self,
        endpoint: &EndpointDef,
        params: &Params,
    ) -> Result<Value, BitlyError> {
        let merged = endpoint.merge_arguments(params)?;
        let auth = self.authentication(endpoint).await?;
        let request = HttpRequest::build(endpoint.method, endpoint.path, &merged, &auth);

        tracing::debug!(endpoint = endpoint.name, "Dispatching Bitly API call");

        let result = self
            .http
            .send(&request)
            .await
            .and_then(HttpResponse::into_data);

        match result {
            Ok(data) => {
                tracing::debug!(endpoint = endpoint.name, "Bitly API call succeeded");
                Ok(data)
            }
            Err(HttpError::Api(error)) => {
                tracing::warn!(
                    endpoint = endpoint.name,
                    status_code = error.status_code,
                    status_txt = %error.status_txt,
                    "Bitly API reported an error"
                );
                Err(HttpError::Api(error).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Returns the bearer token calls are made with.
    ///
    /// For a password credential this performs the one-time exchange if it
    /// has not happened yet. Anonymous clients have no token.
    ///
    /// # Errors
    ///
    /// Returns [`BitlyError::Http`] if the password exchange fails.
    pub async fn access_token(&self) -> Result<Option<AccessToken>, BitlyError> {
        match &self.credential {
            Credential::Anonymous => Ok(None),
            Credential::AccessToken(token) => Ok(Some(token.clone())),
            Credential::Password { .. } => Ok(Some(self.exchanged_token().await?.clone())),
        }
    }

    /// Handles an OAuth callback for this client's configuration.
    ///
    /// See [`oauth::authorize`].
    ///
    /// # Errors
    ///
    /// See [`oauth::authorize`].
    pub async fn authorize(
        &self,
        query: &AuthQuery,
        stored_state: Option<&StateParam>,
    ) -> Result<AuthorizationOutcome, OAuthError> {
        oauth::authorize(&self.http, &self.config, query, stored_state).await
    }

    async fn authentication(&self, endpoint: &EndpointDef) -> Result<AuthAttachment, BitlyError> {
        if let Credential::Password { .. } = self.credential {
            let token = self.exchanged_token().await?;
            return Ok(AuthAttachment::AccessToken(token.clone()));
        }
        Ok(resolve(
            &self.credential,
            endpoint.requires_token,
            endpoint.name,
        )?)
    }

    async fn exchanged_token(&self) -> Result<&AccessToken, BitlyError> {
        self.exchanged_token
            .get_or_try_init(|| async {
                tracing::info!("Exchanging password credential for a Bitly access token");
                let auth = resolve(&self.credential, true, ACCESS_TOKEN_PATH)?;
                let token = exchange_with_auth(&self.http, &auth).await?;
                Ok::<_, BitlyError>(token)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::clients::{InvalidRequestError, TransportError};

    #[derive(Debug, Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn send(
            &self,
            _url: &str,
            _request: &HttpRequest,
            _headers: &HashMap<String, String>,
        ) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                200,
                r#"{"status_code":200,"status_txt":"OK","data":{}}"#,
            ))
        }
    }

    fn client_with(credential: Credential) -> (BitlyClient, Arc<CountingTransport>) {
        let transport = Arc::new(CountingTransport::default());
        let client =
            BitlyClient::with_transport(BitlyConfig::default(), credential, transport.clone());
        (client, transport)
    }

    #[tokio::test]
    async fn test_anonymous_client_fails_before_transport() {
        let (client, transport) = client_with(Credential::Anonymous);

        let result = client
            .call("shorten", Params::new().set("longUrl", "https://example.com"))
            .await;

        assert!(matches!(result, Err(BitlyError::Authentication(ref e)) if e.endpoint == "shorten"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_client_can_call_public_endpoint() {
        let (client, transport) = client_with(Credential::Anonymous);

        tokio_test::assert_ok!(
            client
                .call("expand", Params::new().set("shortUrl", "http://bit.ly/abc"))
                .await
        );

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_endpoint_and_parameter_send_nothing() {
        let (client, transport) = client_with(Credential::access_token("tok").unwrap());

        let result = client.call("no_such_endpoint", Params::new()).await;
        tokio_test::assert_err!(&result);
        assert!(matches!(
            result,
            Err(BitlyError::InvalidRequest(InvalidRequestError::UnknownEndpoint { .. }))
        ));

        let result = client
            .call("shorten", Params::new().set("longUrl", "x").set("longurl", "y"))
            .await;
        assert!(matches!(
            result,
            Err(BitlyError::InvalidRequest(InvalidRequestError::UnknownParameter { .. }))
        ));

        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_access_token_is_none() {
        let (client, _) = client_with(Credential::Anonymous);
        assert!(client.access_token().await.unwrap().is_none());

        let (client, _) = client_with(Credential::access_token("tok").unwrap());
        assert_eq!(
            client.access_token().await.unwrap().unwrap().as_ref(),
            "tok"
        );
    }
}
