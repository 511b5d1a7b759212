//! The transport seam.
//!
//! [`Transport`] performs a single HTTP exchange. The library ships
//! [`ReqwestTransport`]; tests and embedders can plug in their own
//! implementation through [`HttpClient::with_transport`].
//!
//! A transport reports failures where no response arrived (DNS, TLS,
//! timeouts, refused connections) as [`TransportError`] with no status.
//! [`ReqwestTransport`] reports a non-2xx response as [`TransportError`] with
//! its status and never reads that body. The HTTP client applies the same
//! classification to responses from other transports.
//!
//! [`HttpClient::with_transport`]: crate::clients::HttpClient::with_transport

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Performs one HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends `request` to `url` with the given headers.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] with `status: None` when no response was
    /// received. Implementations may also return a status error for a
    /// non-2xx response.
    async fn send(
        &self,
        url: &str,
        request: &HttpRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client using rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn describe(error: &reqwest::Error) -> String {
        if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            format!("request failed: {error}")
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        request: &HttpRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(form) = &request.form {
            req_builder = req_builder.form(form);
        }

        if let Some(auth) = &request.basic_auth {
            req_builder = req_builder.basic_auth(&auth.username, Some(&auth.password));
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| TransportError::no_response(Self::describe(&e)))?;

        let code = res.status().as_u16();
        if !res.status().is_success() {
            return Err(TransportError::status(code));
        }

        let body = res
            .text()
            .await
            .map_err(|e| TransportError::no_response(Self::describe(&e)))?;

        Ok(HttpResponse::new(code, body))
    }
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};
