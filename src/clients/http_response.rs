//! Response types and envelope decoding.
//!
//! Every Bitly endpoint answers with a JSON envelope:
//!
//! ```json
//! {"status_code": 200, "status_txt": "OK", "data": {"url": "http://bit.ly/abc"}}
//! ```
//!
//! [`HttpResponse::into_data`] applies the envelope rule used for ordinary
//! endpoint calls. [`decode_token_body`] applies the more permissive rule used
//! only by the OAuth token exchanges, which may answer with a raw token or a
//! URL-encoded body instead of JSON.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{ApiError, DecodeError, HttpError};
use crate::config::AccessToken;

/// Application status code reported by a successful envelope.
pub const ENVELOPE_OK: i64 = 200;

/// A raw 2xx response as returned by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Decodes the envelope and returns its `data` field.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Decode`] if the body is not a JSON envelope
    /// - [`HttpError::Api`] if the envelope reports a non-200 status
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitly_api::clients::{HttpError, HttpResponse};
    ///
    /// let ok = HttpResponse::new(200, r#"{"status_code":200,"status_txt":"OK","data":{"x":1}}"#);
    /// assert_eq!(ok.into_data().unwrap(), serde_json::json!({"x": 1}));
    ///
    /// let failed = HttpResponse::new(200, r#"{"status_code":500,"status_txt":"INVALID_URI"}"#);
    /// assert!(matches!(failed.into_data(), Err(HttpError::Api(e)) if e.status_txt == "INVALID_URI"));
    /// ```
    pub fn into_data(self) -> Result<Value, HttpError> {
        let envelope = ResponseEnvelope::parse(&self.body)?;
        envelope.into_result()
    }
}

/// The JSON wrapper every endpoint response uses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Application-level status code.
    pub status_code: i64,
    /// Application-level status text.
    #[serde(default)]
    pub status_txt: String,
    /// The payload. `Null` when absent.
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    /// Parses an envelope from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not JSON or lacks `status_code`.
    pub fn parse(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(|e| DecodeError {
            message: format!("response is not a Bitly envelope: {e}"),
        })
    }

    /// Returns `true` when the envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == ENVELOPE_OK
    }

    /// Converts the envelope into its payload or an [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] when `status_code` is not 200.
    pub fn into_result(self) -> Result<Value, HttpError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError {
                status_code: self.status_code,
                status_txt: self.status_txt,
            }
            .into())
        }
    }
}

/// Decodes the body of an OAuth token exchange.
///
/// Accepted shapes, in order:
///
/// 1. A JSON envelope with a non-200 status: an [`ApiError`].
/// 2. A JSON object with an `access_token` string, at the top level or
///    inside an envelope's `data`.
/// 3. A URL-encoded `key=value&...` body containing `access_token`.
/// 4. A bare token: a body that is not JSON, or a JSON string or number.
///
/// JSON `null`, booleans and arrays are never tokens.
///
/// # Errors
///
/// Returns [`HttpError::Api`] for a failed envelope, and [`HttpError::Decode`]
/// when no token can be found.
///
/// # Example
///
/// ```rust
/// use bitly_api::clients::decode_token_body;
///
/// let token = decode_token_body("access_token=abc123&token_type=bearer").unwrap();
/// assert_eq!(token.as_ref(), "abc123");
///
/// let token = decode_token_body("e663e30818201d28dd07803e57333bed4f15803a").unwrap();
/// assert_eq!(token.as_ref(), "e663e30818201d28dd07803e57333bed4f15803a");
/// ```
pub fn decode_token_body(body: &str) -> Result<AccessToken, HttpError> {
    let trimmed = body.trim();

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ Value::Object(_)) => return token_from_json_object(&value),
        Ok(Value::String(token)) => return token_from_text(&token),
        Ok(Value::Null | Value::Bool(_) | Value::Array(_)) => {
            return Err(DecodeError {
                message: "token response is JSON but not a token".to_string(),
            }
            .into());
        }
        // Numeric tokens parse as JSON numbers and are read as text below.
        Ok(Value::Number(_)) | Err(_) => {}
    }

    if trimmed.contains('=') {
        let pairs = parse_form(trimmed);
        return pairs
            .into_iter()
            .find(|(key, _)| key == "access_token")
            .map_or_else(
                || {
                    Err(DecodeError {
                        message: "token response has no access_token field".to_string(),
                    }
                    .into())
                },
                |(_, token)| token_from_text(&token),
            );
    }

    token_from_text(trimmed)
}

fn token_from_json_object(value: &Value) -> Result<AccessToken, HttpError> {
    if value.get("status_code").is_some() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(value.clone()).map_err(|e| DecodeError {
                message: format!("malformed token envelope: {e}"),
            })?;
        let data = envelope.into_result()?;
        if let Some(token) = data.get("access_token").and_then(Value::as_str) {
            return token_from_text(token);
        }
    }

    if let Some(token) = value.get("access_token").and_then(Value::as_str) {
        return token_from_text(token);
    }

    Err(DecodeError {
        message: "token response has no access_token field".to_string(),
    }
    .into())
}

fn token_from_text(text: &str) -> Result<AccessToken, HttpError> {
    let text = text.trim();
    if text.is_empty() || text.chars().any(char::is_whitespace) || text.starts_with('<') {
        return Err(DecodeError {
            message: "token response is not a token".to_string(),
        }
        .into());
    }

    AccessToken::new(text).map_err(|e| {
        DecodeError {
            message: e.to_string(),
        }
        .into()
    })
}

/// Parses an `application/x-www-form-urlencoded` body.
///
/// Malformed percent escapes are kept verbatim.
#[must_use]
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key), form_decode(value))
        })
        .collect()
}

fn form_decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    let decoded = urlencoding::decode(&raw).map_or_else(|_| raw.clone(), Cow::into_owned);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_returns_data() {
        let response = HttpResponse::new(
            200,
            r#"{"status_code":200,"status_txt":"OK","data":{"x":1}}"#,
        );
        assert_eq!(response.into_data().unwrap(), json!({"x": 1}));
    }

    #[test]
    fn test_success_envelope_without_data_returns_null() {
        let response = HttpResponse::new(200, r#"{"status_code":200,"status_txt":"OK"}"#);
        assert_eq!(response.into_data().unwrap(), Value::Null);
    }

    #[test]
    fn test_failed_envelope_returns_api_error() {
        let response = HttpResponse::new(200, r#"{"status_code":500,"status_txt":"INVALID_URI"}"#);
        match response.into_data() {
            Err(HttpError::Api(error)) => {
                assert_eq!(error.status_code, 500);
                assert_eq!(error.status_txt, "INVALID_URI");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_decode_error_for_endpoints() {
        let response = HttpResponse::new(200, "access_token=abc123");
        assert!(matches!(response.into_data(), Err(HttpError::Decode(_))));

        let response = HttpResponse::new(200, r#"{"data":{}}"#);
        assert!(matches!(response.into_data(), Err(HttpError::Decode(_))));
    }

    #[test]
    fn test_is_ok_range() {
        assert!(HttpResponse::new(200, "").is_ok());
        assert!(HttpResponse::new(204, "").is_ok());
        assert!(!HttpResponse::new(301, "").is_ok());
        assert!(!HttpResponse::new(503, "").is_ok());
    }

    #[test]
    fn test_token_from_url_encoded_body() {
        let token = decode_token_body("access_token=abc123&token_type=bearer").unwrap();
        assert_eq!(token.as_ref(), "abc123");

        let token = decode_token_body("login=bob&access_token=a%2Fb%2Bc&apiKey=R_1").unwrap();
        assert_eq!(token.as_ref(), "a/b+c");
    }

    #[test]
    fn test_token_from_raw_body() {
        let token = decode_token_body("  abc123\n").unwrap();
        assert_eq!(token.as_ref(), "abc123");

        let token = decode_token_body("1234567890").unwrap();
        assert_eq!(token.as_ref(), "1234567890");
    }

    #[test]
    fn test_token_from_json_object() {
        let token = decode_token_body(r#"{"access_token":"json-token","login":"bob"}"#).unwrap();
        assert_eq!(token.as_ref(), "json-token");

        let token = decode_token_body(
            r#"{"status_code":200,"status_txt":"OK","data":{"access_token":"wrapped"}}"#,
        )
        .unwrap();
        assert_eq!(token.as_ref(), "wrapped");
    }

    #[test]
    fn test_token_envelope_failure_is_api_error() {
        let result = decode_token_body(r#"{"status_code":401,"status_txt":"INVALID_LOGIN"}"#);
        assert!(matches!(result, Err(HttpError::Api(e)) if e.status_txt == "INVALID_LOGIN"));
    }

    #[test]
    fn test_token_unrecognized_bodies_are_decode_errors() {
        assert!(matches!(decode_token_body(""), Err(HttpError::Decode(_))));
        assert!(matches!(
            decode_token_body("login=bob&apiKey=R_1"),
            Err(HttpError::Decode(_))
        ));
        assert!(matches!(
            decode_token_body("<html>oops</html>"),
            Err(HttpError::Decode(_))
        ));
        assert!(matches!(
            decode_token_body(r#"{"login":"bob"}"#),
            Err(HttpError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_form_decodes_plus_and_percent() {
        let pairs = parse_form("a=hello+world&b=%41&c");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "hello world".to_string()),
                ("b".to_string(), "A".to_string()),
                ("c".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_token_json_non_token_values_are_decode_errors() {
        for body in ["null", "true", "false", "[]", r#"["x"]"#] {
            assert!(
                matches!(decode_token_body(body), Err(HttpError::Decode(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn test_token_failed_envelope_wins_over_top_level_token() {
        let result = decode_token_body(
            r#"{"status_code":403,"status_txt":"RATE_LIMIT_EXCEEDED","access_token":"stale"}"#,
        );
        assert!(matches!(result, Err(HttpError::Api(e)) if e.status_code == 403));
    }
}
