//! Request descriptors.
//!
//! This module provides the [`HttpRequest`] type produced by the request
//! builder. A descriptor is created fresh for every call and discarded after
//! the call completes.
//!
//! # Building
//!
//! [`HttpRequest::build`] is a pure function of its inputs:
//!
//! - parameters that are `Null` or empty are dropped
//! - booleans become `"true"` / `"false"`
//! - `format=json` is always present
//! - the resolved authentication is merged in last
//! - GET parameters go to the query string, POST parameters to a form body
//!
//! ```rust
//! use bitly_api::auth::AuthAttachment;
//! use bitly_api::clients::{HttpMethod, HttpRequest, Params};
//!
//! let params = Params::new()
//!     .set("longUrl", "https://example.com")
//!     .set("domain", "")
//!     .set("private", false);
//!
//! let request = HttpRequest::build(HttpMethod::Get, "/v3/shorten", &params, &AuthAttachment::None);
//!
//! assert_eq!(request.param("private"), Some("false"));
//! assert_eq!(request.param("format"), Some("json"));
//! assert_eq!(request.param("domain"), None);
//! ```

use std::fmt;

use base64::prelude::*;

use crate::auth::AuthAttachment;
use crate::clients::params::Params;

/// Name of the bearer token parameter.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Name of the response format parameter.
pub const FORMAT_PARAM: &str = "format";

const REDACTED: &str = "*****";

// Parameters whose values are masked in logged copies of a request.
const SENSITIVE_PARAMS: &[&str] = &[ACCESS_TOKEN_PARAM, "client_secret", "code"];

/// HTTP methods used by the Bitly API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET; parameters travel in the query string.
    Get,
    /// HTTP POST; parameters travel in a form-encoded body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// HTTP basic-auth credentials, carried separately from the body.
///
/// The password is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// The username.
    pub username: String,
    /// The password.
    pub password: String,
}

impl BasicAuth {
    /// Returns the `Authorization` header value (`Basic <base64>`).
    ///
    /// ```rust
    /// use bitly_api::clients::BasicAuth;
    ///
    /// let auth = BasicAuth { username: "user".into(), password: "pass".into() };
    /// assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNz");
    /// ```
    #[must_use]
    pub fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64_STANDARD.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// A transport-ready request.
///
/// Exactly one of `query` / `form` carries the parameters, depending on the
/// method. The `Debug` output redacts the access token, OAuth client secret,
/// authorization code and basic-auth password; use [`redacted_pairs`](Self::redacted_pairs) for log fields.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the API base URL).
    pub path: String,
    /// Query string pairs, in order. Empty for POST.
    pub query: Vec<(String, String)>,
    /// Form body pairs, in order. `None` for GET.
    pub form: Option<Vec<(String, String)>>,
    /// Basic-auth credentials, independent of the body.
    pub basic_auth: Option<BasicAuth>,
}

impl HttpRequest {
    /// Builds a request descriptor from an endpoint path, parameters and the
    /// resolved authentication.
    #[must_use]
    pub fn build(
        method: HttpMethod,
        path: impl Into<String>,
        params: &Params,
        auth: &AuthAttachment,
    ) -> Self {
        let mut pairs: Vec<(String, String)> = params
            .iter()
            .filter(|(name, _)| *name != FORMAT_PARAM && *name != ACCESS_TOKEN_PARAM)
            .flat_map(|(name, value)| {
                value
                    .to_wire()
                    .into_iter()
                    .map(move |wire| (name.to_string(), wire))
            })
            .collect();

        pairs.push((FORMAT_PARAM.to_string(), "json".to_string()));

        let mut basic_auth = None;
        match auth {
            AuthAttachment::AccessToken(token) => {
                pairs.push((ACCESS_TOKEN_PARAM.to_string(), token.as_ref().to_string()));
            }
            AuthAttachment::Basic(credentials) => basic_auth = Some(credentials.clone()),
            AuthAttachment::None => {}
        }

        let (query, form) = match method {
            HttpMethod::Get => (pairs, None),
            HttpMethod::Post => (Vec::new(), Some(pairs)),
        };

        Self {
            http_method: method,
            path: path.into(),
            query,
            form,
            basic_auth,
        }
    }

    /// Returns the parameter pairs, wherever they travel.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        self.form.as_deref().unwrap_or(&self.query)
    }

    /// Returns the first value sent for `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.pairs()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns a copy of the parameter pairs with secrets masked.
    ///
    /// `access_token`, `client_secret` and `code` values are replaced.
    #[must_use]
    pub fn redacted_pairs(&self) -> Vec<(String, String)> {
        self.pairs()
            .iter()
            .map(|(key, value)| {
                if SENSITIVE_PARAMS.contains(&key.as_str()) {
                    (key.clone(), REDACTED.to_string())
                } else {
                    (key.clone(), value.clone())
                }
            })
            .collect()
    }

    /// Encodes pairs as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode_pairs(pairs: &[(String, String)]) -> String {
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("http_method", &self.http_method)
            .field("path", &self.path)
            .field("params", &self.redacted_pairs())
            .field("basic_auth", &self.basic_auth)
            .finish()
    }
}
