//! Call parameters.
//!
//! [`Params`] is the argument map handed to endpoint calls. Values are typed
//! via [`ParamValue`] so booleans and integers serialize predictably, and
//! `Null` / empty strings mean "not supplied".
//!
//! # Example
//!
//! ```rust
//! use bitly_api::clients::{Params, ParamValue};
//!
//! let params = Params::new()
//!     .set("longUrl", "https://example.com")
//!     .set("private", false)
//!     .set("user_ts", 1_400_000_000)
//!     .set("title", None::<String>);
//!
//! assert_eq!(params.get("private"), Some(&ParamValue::Boolean(false)));
//! assert_eq!(params.get("title"), Some(&ParamValue::Null));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Explicitly absent.
    Null,
    /// A string value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A boolean, sent as `"true"` / `"false"`.
    Boolean(bool),
    /// Several values sent under the same key.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns `true` when the value counts as "not supplied".
    ///
    /// `Null`, empty strings and lists without any non-empty item are absent.
    /// `Boolean(false)` and `Integer(0)` are present.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.iter().all(String::is_empty),
            Self::Integer(_) | Self::Boolean(_) => false,
        }
    }

    /// Renders the value as the wire strings it is sent as.
    ///
    /// Absent values and empty list items produce nothing.
    #[must_use]
    pub fn to_wire(&self) -> Vec<String> {
        match self {
            Self::Null => Vec::new(),
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => vec![text.clone()],
            Self::Integer(value) => vec![value.to_string()],
            Self::Boolean(value) => vec![value.to_string()],
            Self::List(items) => items.iter().filter(|i| !i.is_empty()).cloned().collect(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::List(items) => write!(f, "{items:?}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An ordered map of parameter names to values.
///
/// Iteration order is by name, so building the same request twice always
/// yields identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
