//! Configuration types for the Bitly API client.
//!
//! # Overview
//!
//! - [`BitlyConfig`]: The configuration struct holding all client settings
//! - [`BitlyConfigBuilder`]: A builder for constructing [`BitlyConfig`] instances
//! - [`ClientId`] / [`ClientSecret`]: OAuth app credentials
//! - [`AccessToken`]: A bearer token with masked debug output
//! - [`BaseUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use bitly_api::{BitlyConfig, ClientId, ClientSecret, BaseUrl};
//!
//! let config = BitlyConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .redirect_url(BaseUrl::new("https://myapp.example.com/callback").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url().as_ref(), "https://api-ssl.bitly.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ClientId, ClientSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api-ssl.bitly.com";

/// Default OAuth authorization page.
pub const DEFAULT_AUTHORIZE_URL: &str = "https://bitly.com/oauth/authorize";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Bitly API client.
///
/// `BitlyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct BitlyConfig {
    api_base_url: BaseUrl,
    authorize_url: BaseUrl,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    redirect_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Duration,
}

impl BitlyConfig {
    /// Creates a new builder for constructing a `BitlyConfig`.
    #[must_use]
    pub fn builder() -> BitlyConfigBuilder {
        BitlyConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the OAuth authorization page URL.
    #[must_use]
    pub const fn authorize_url(&self) -> &BaseUrl {
        &self.authorize_url
    }

    /// Returns the OAuth client id, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the OAuth client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the OAuth redirect URL, if configured.
    #[must_use]
    pub const fn redirect_url(&self) -> Option<&BaseUrl> {
        self.redirect_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for BitlyConfig {
    fn default() -> Self {
        Self {
            api_base_url: BaseUrl::new(DEFAULT_API_BASE_URL).expect("default API URL is valid"),
            authorize_url: BaseUrl::new(DEFAULT_AUTHORIZE_URL)
                .expect("default authorize URL is valid"),
            client_id: None,
            client_secret: None,
            redirect_url: None,
            user_agent_prefix: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Verify BitlyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitlyConfig>();
};

/// Builder for constructing [`BitlyConfig`] instances.
///
/// # Defaults
///
/// - `api_base_url`: `https://api-ssl.bitly.com`
/// - `authorize_url`: `https://bitly.com/oauth/authorize`
/// - `timeout`: 30 seconds
/// - everything else: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bitly_api::{BitlyConfig, BaseUrl};
///
/// let config = BitlyConfig::builder()
///     .api_base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Default)]
pub struct BitlyConfigBuilder {
    api_base_url: Option<BaseUrl>,
    authorize_url: Option<BaseUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    redirect_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl BitlyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Overrides the OAuth authorization page URL.
    #[must_use]
    pub fn authorize_url(mut self, url: BaseUrl) -> Self {
        self.authorize_url = Some(url);
        self
    }

    /// Sets the OAuth client id.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth client secret.
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the URL Bitly redirects back to after authorization.
    #[must_use]
    pub fn redirect_url(mut self, url: BaseUrl) -> Self {
        self.redirect_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout applied by the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`BitlyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a client secret is
    /// configured without a client id.
    pub fn build(self) -> Result<BitlyConfig, ConfigError> {
        if self.client_secret.is_some() && self.client_id.is_none() {
            return Err(ConfigError::MissingRequiredField { field: "client_id" });
        }

        let defaults = BitlyConfig::default();
        Ok(BitlyConfig {
            api_base_url: self.api_base_url.unwrap_or(defaults.api_base_url),
            authorize_url: self.authorize_url.unwrap_or(defaults.authorize_url),
            client_id: self.client_id,
            client_secret: self.client_secret,
            redirect_url: self.redirect_url,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout.unwrap_or(defaults.timeout),
        })
    }
}
