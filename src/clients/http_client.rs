//! HTTP client for Bitly API communication.
//!
//! This module provides the [`HttpClient`] type, which resolves request paths
//! against the configured API host, adds the default headers and classifies
//! the transport outcome.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::errors::{HttpError, TransportError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{BaseUrl, BitlyConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Bitly API.
///
/// The client handles:
/// - URL construction from the configured `api_base_url`
/// - Default headers (`User-Agent`, `Accept`)
/// - Mapping non-2xx statuses to [`TransportError`] without reading the body
///
/// There is no retry logic: every request is sent exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bitly_api::BitlyConfig;
/// use bitly_api::auth::AuthAttachment;
/// use bitly_api::clients::{HttpClient, HttpMethod, HttpRequest, Params};
///
/// let client = HttpClient::new(&BitlyConfig::default());
///
/// let params = Params::new().set("shortUrl", "http://bit.ly/abc");
/// let request = HttpRequest::build(HttpMethod::Get, "/v3/expand", &params, &AuthAttachment::None);
///
/// let data = client.send(&request).await?.into_data()?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The transport performing the exchange.
    transport: Arc<dyn Transport>,
    /// Base URL (e.g., `https://api-ssl.bitly.com`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client using the default reqwest transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitly_api::BitlyConfig;
    /// use bitly_api::clients::HttpClient;
    ///
    /// let client = HttpClient::new(&BitlyConfig::default());
    /// assert_eq!(client.base_url().as_ref(), "https://api-ssl.bitly.com");
    /// ```
    #[must_use]
    pub fn new(config: &BitlyConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new(config.timeout())))
    }

    /// Creates a new HTTP client sending through the given transport.
    #[must_use]
    pub fn with_transport(config: &BitlyConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Bitly API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            transport,
            base_url: config.api_base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the raw 2xx response.
    ///
    /// The response body is returned undecoded; callers choose between
    /// [`HttpResponse::into_data`] and
    /// [`decode_token_body`](crate::clients::decode_token_body).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if no response arrived or the status
    /// is not 2xx. The body of a non-2xx response is discarded unread.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.base_url.join(&request.path);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            params = ?request.redacted_pairs(),
            "Sending Bitly API request"
        );

        let response = self
            .transport
            .send(&url, request, &self.default_headers)
            .await?;

        if !response.is_ok() {
            tracing::debug!(
                path = %request.path,
                status = response.code,
                "Bitly API request failed at HTTP level"
            );
            return Err(TransportError::status(response.code).into());
        }

        Ok(response)
    }
}
