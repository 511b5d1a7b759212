//! The OAuth `state` parameter.
//!
//! [`StateParam`] is sent with the authorization redirect and echoed back by
//! Bitly on the callback. Comparing the two protects the callback against
//! cross-site request forgery.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;
use subtle::ConstantTimeEq;

/// OAuth state parameter.
///
/// # Example
///
/// ```rust
/// use bitly_api::auth::oauth::StateParam;
///
/// let state = StateParam::new();
/// assert_eq!(state.as_ref().len(), 15);
/// assert!(state.matches(state.as_ref()));
/// assert!(!state.matches("something-else"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Generates a fresh 15-character alphanumeric state from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();
        Self(nonce)
    }

    /// Wraps a caller-provided state value as-is.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compares `received` with this state in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        constant_time_compare(&self.0, received)
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compares two strings without short-circuiting on the first difference.
///
/// Strings of different lengths compare unequal.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
