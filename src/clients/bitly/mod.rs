//! High-level Bitly API client.
//!
//! - [`BitlyClient`]: Dispatches calls through the endpoint catalog
//! - [`BitlyError`]: Error type for those calls
//!
//! Every catalog endpoint is reachable both by name through
//! [`BitlyClient::call`] and as a method of the same name.

mod client;
mod errors;
mod methods;

pub use client::BitlyClient;
pub use errors::BitlyError;
