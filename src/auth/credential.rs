//! Client credentials.

use std::fmt;

use crate::config::AccessToken;
use crate::error::ConfigError;

/// The credential a [`BitlyClient`](crate::BitlyClient) is constructed with.
///
/// A client holds exactly one credential for its whole lifetime. Secrets are
/// masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use bitly_api::auth::Credential;
///
/// let credential = Credential::access_token("abc123").unwrap();
/// assert!(credential.is_authenticated());
/// assert_eq!(format!("{:?}", credential), "AccessToken(AccessToken(*****))");
///
/// assert!(!Credential::Anonymous.is_authenticated());
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credential {
    /// No credential; only public endpoints can be called.
    #[default]
    Anonymous,
    /// A bearer token sent as the `access_token` parameter.
    AccessToken(AccessToken),
    /// A username and password, exchanged once for a bearer token.
    Password {
        /// The Bitly login.
        username: String,
        /// The account password.
        password: String,
    },
}

impl Credential {
    /// Creates an access token credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn access_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::AccessToken(AccessToken::new(token)?))
    }

    /// Creates a username/password credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self::Password {
            username,
            password: password.into(),
        })
    }

    /// Returns `false` only for [`Credential::Anonymous`].
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

impl From<AccessToken> for Credential {
    fn from(token: AccessToken) -> Self {
        Self::AccessToken(token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::AccessToken(token) => f.debug_tuple("AccessToken").field(token).finish(),
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"*****")
                .finish(),
        }
    }
}
