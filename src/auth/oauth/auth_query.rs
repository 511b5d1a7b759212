//! OAuth callback query parameters.

use serde::Deserialize;

use crate::clients::parse_form;

/// Query parameters Bitly appends to the redirect URL.
///
/// Can be deserialized directly by web frameworks, or parsed from the raw
/// query string with [`AuthQuery::from_query_string`].
///
/// # Example
///
/// ```rust
/// use bitly_api::auth::oauth::AuthQuery;
///
/// let query = AuthQuery::from_query_string("?code=abc&state=xyz");
/// assert_eq!(query.code.as_deref(), Some("abc"));
/// assert_eq!(query.state.as_deref(), Some("xyz"));
/// assert!(query.error.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthQuery {
    /// The authorization code, present after the user granted access.
    #[serde(default)]
    pub code: Option<String>,
    /// The state echoed back from the authorization request.
    #[serde(default)]
    pub state: Option<String>,
    /// The provider error, present when access was not granted.
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthQuery {
    /// Creates a query carrying an authorization code and state.
    #[must_use]
    pub fn new(code: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            state: Some(state.into()),
            error: None,
        }
    }

    /// Parses a raw query string, with or without the leading `?`.
    ///
    /// Empty values are treated as absent; unrelated keys are ignored.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut result = Self::default();
        for (key, value) in parse_form(query.trim_start_matches('?')) {
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "code" => result.code = Some(value),
                "state" => result.state = Some(value),
                "error" => result.error = Some(value),
                _ => {}
            }
        }
        result
    }

    /// Returns the authorization code, if a non-empty one is present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string_decodes_values() {
        let query = AuthQuery::from_query_string("code=a%2Fb&state=s+1&extra=1");
        assert_eq!(query.code(), Some("a/b"));
        assert_eq!(query.state.as_deref(), Some("s 1"));
    }

    #[test]
    fn test_empty_code_is_absent() {
        let query = AuthQuery::from_query_string("?code=&state=x");
        assert_eq!(query.code(), None);

        let query = AuthQuery {
            code: Some(String::new()),
            ..AuthQuery::default()
        };
        assert_eq!(query.code(), None);
    }

    #[test]
    fn test_error_is_captured() {
        let query = AuthQuery::from_query_string("error=access_denied");
        assert_eq!(query.error.as_deref(), Some("access_denied"));
        assert!(query.code.is_none());
    }

    #[test]
    fn test_deserialize_from_json() {
        let query: AuthQuery = serde_json::from_str(r#"{"code":"c","state":"s"}"#).unwrap();
        assert_eq!(query, AuthQuery::new("c", "s"));
    }
}
