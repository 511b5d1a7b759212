//! HTTP client types for Bitly API communication.
//!
//! This module provides the request/response pipeline under
//! [`BitlyClient`]. It handles request building, authentication attachment,
//! transport, and decoding of Bitly's response envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BitlyClient`]: Higher-level client dispatching through the endpoint catalog
//! - [`BitlyError`]: Error type for [`BitlyClient`] calls
//! - [`HttpClient`]: Sends requests and maps HTTP failures
//! - [`HttpRequest`]: A fully built request (method, path, query or form, auth)
//! - [`HttpResponse`]: A raw response with envelope decoding
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`Params`] and [`ParamValue`]: Call arguments
//! - [`Transport`]: The seam between the client and the network
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::BitlyConfig;
//! use bitly_api::auth::AuthAttachment;
//! use bitly_api::clients::{HttpClient, HttpMethod, HttpRequest, Params};
//!
//! let client = HttpClient::new(&BitlyConfig::default());
//!
//! let params = Params::new().set("shortUrl", "http://bit.ly/abc");
//! let request = HttpRequest::build(HttpMethod::Get, "/v3/expand", &params, &AuthAttachment::None);
//!
//! let data = client.send(&request).await?.into_data()?;
//! ```
//!
//! # Failure Classes
//!
//! - A non-2xx status or a missing response is a [`TransportError`]; the body
//!   is not read
//! - A 2xx response whose envelope `status_code` is not 200 is an [`ApiError`]
//! - A 2xx response that is not a valid envelope is a [`DecodeError`]
//!
//! Nothing is retried.

mod bitly;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod transport;

pub use errors::{ApiError, DecodeError, HttpError, InvalidRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{BasicAuth, HttpMethod, HttpRequest, ACCESS_TOKEN_PARAM, FORMAT_PARAM};
pub use http_response::{
    decode_token_body, parse_form, HttpResponse, ResponseEnvelope, ENVELOPE_OK,
};
pub use params::{ParamValue, Params};
pub use transport::{ReqwestTransport, Transport};

// Re-export the high-level client at the clients module level
pub use bitly::{BitlyClient, BitlyError};
