//! The endpoint catalog.
//!
//! Every Bitly operation this crate can call is described by one static
//! [`EndpointDef`]: its name, HTTP method, path, whether it needs a token and
//! the parameters it accepts. The client dispatches purely from this data.
//!
//! # Argument Merging
//!
//! [`EndpointDef::merge_arguments`] is the call boundary check:
//!
//! - unknown parameter names are rejected
//! - values must fit the declared [`ParamKind`]
//! - `Null` and empty values count as "not supplied" and are replaced by the
//!   declared default, if any
//! - required parameters must end up present
//!
//! # Example
//!
//! ```rust
//! use bitly_api::clients::{Params, ParamValue};
//! use bitly_api::endpoints;
//!
//! let endpoint = endpoints::find("link_clicks").unwrap();
//! let merged = endpoint
//!     .merge_arguments(&Params::new().set("link", "http://bit.ly/abc"))
//!     .unwrap();
//!
//! assert_eq!(merged.get("unit"), Some(&ParamValue::Text("day".to_string())));
//! assert_eq!(merged.get("units"), Some(&ParamValue::Integer(-1)));
//!
//! assert!(endpoint.merge_arguments(&Params::new().set("lnk", "x")).is_err());
//! ```

mod catalog;
mod values;

pub use catalog::CATALOG;
pub use values::{ContentType, LinkFilter, SearchField, ShortDomain, TimeUnit};

use std::fmt;

use crate::clients::{HttpMethod, InvalidRequestError, ParamValue, Params};

/// Largest absolute UTC offset, in hours, accepted as a timezone.
pub const MAX_UTC_OFFSET: i64 = 14;

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free text. Integers are accepted and sent in decimal.
    Text,
    /// A whole number, or text that parses as one.
    Integer,
    /// `true` / `false`, or the same words as text.
    Boolean,
    /// One of a fixed set of words.
    Enum(&'static [&'static str]),
    /// A UTC offset in hours (`-14..=14`) or a tz database name.
    Timezone,
    /// One or more values, sent as repeated keys.
    List,
    /// One or more words from a fixed set, sent comma-separated.
    EnumList(&'static [&'static str]),
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Integer => f.write_str("an integer"),
            Self::Boolean => f.write_str("a boolean"),
            Self::Enum(names) => write!(f, "one of {}", names.join(", ")),
            Self::Timezone => write!(
                f,
                "a UTC offset between -{MAX_UTC_OFFSET} and {MAX_UTC_OFFSET} or a timezone name"
            ),
            Self::List => f.write_str("text or a list of text"),
            Self::EnumList(names) => write!(f, "any of {}", names.join(", ")),
        }
    }
}

/// A declared default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// A text default.
    Text(&'static str),
    /// An integer default.
    Integer(i64),
    /// A boolean default.
    Boolean(bool),
}

impl From<DefaultValue> for ParamValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(text) => Self::Text(text.to_string()),
            DefaultValue::Integer(number) => Self::Integer(number),
            DefaultValue::Boolean(flag) => Self::Boolean(flag),
        }
    }
}

/// A parameter accepted by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDef {
    /// The wire name.
    pub name: &'static str,
    /// The accepted kind of value.
    pub kind: ParamKind,
    /// Whether the call fails without it.
    pub required: bool,
    /// Value used when the caller supplies none.
    pub default: Option<DefaultValue>,
}

impl ParamDef {
    /// Declares an optional parameter without a default.
    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    /// Declares a required parameter.
    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Checks `value` against the declared kind and returns the normalized
    /// value to send.
    fn normalize(&self, value: &ParamValue) -> Option<ParamValue> {
        match (self.kind, value) {
            (ParamKind::Text, ParamValue::Text(_) | ParamValue::Integer(_)) => Some(value.clone()),
            (ParamKind::Integer, ParamValue::Integer(_)) => Some(value.clone()),
            (ParamKind::Integer, ParamValue::Text(text)) => {
                text.trim().parse::<i64>().ok().map(ParamValue::Integer)
            }
            (ParamKind::Boolean, ParamValue::Boolean(_)) => Some(value.clone()),
            (ParamKind::Boolean, ParamValue::Text(text)) => match text.as_str() {
                "true" => Some(ParamValue::Boolean(true)),
                "false" => Some(ParamValue::Boolean(false)),
                _ => None,
            },
            (ParamKind::Enum(names), ParamValue::Text(text)) => {
                names.contains(&text.as_str()).then(|| value.clone())
            }
            (ParamKind::Timezone, ParamValue::Integer(offset)) => {
                is_utc_offset(*offset).then(|| value.clone())
            }
            (ParamKind::Timezone, ParamValue::Text(text)) => match text.trim().parse::<i64>() {
                Ok(offset) => is_utc_offset(offset).then_some(ParamValue::Integer(offset)),
                Err(_) => is_timezone_name(text).then(|| value.clone()),
            },
            (ParamKind::List, ParamValue::Text(text)) => Some(ParamValue::List(vec![text.clone()])),
            (ParamKind::List, ParamValue::List(_)) => Some(value.clone()),
            (ParamKind::EnumList(names), ParamValue::Text(text)) => {
                let items: Vec<String> = text.split(',').map(|s| s.trim().to_string()).collect();
                enum_list(names, &items)
            }
            (ParamKind::EnumList(names), ParamValue::List(items)) => enum_list(names, items),
            _ => None,
        }
    }
}

const fn is_utc_offset(offset: i64) -> bool {
    offset >= -MAX_UTC_OFFSET && offset <= MAX_UTC_OFFSET
}

// tz database names are `Area/Location[/Sub]`, plus a few bare aliases.
fn is_timezone_name(text: &str) -> bool {
    if matches!(text, "UTC" | "GMT") {
        return true;
    }
    text.contains('/')
        && !text.starts_with('/')
        && !text.ends_with('/')
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+'))
}

fn enum_list(names: &[&str], items: &[String]) -> Option<ParamValue> {
    let items: Vec<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| !item.is_empty())
        .collect();
    if items.iter().all(|item| names.contains(item)) {
        Some(ParamValue::Text(items.join(",")))
    } else {
        None
    }
}

/// A single Bitly operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDef {
    /// The logical name used for dispatch (e.g. `"link_clicks"`).
    pub name: &'static str,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path relative to the API base URL.
    pub path: &'static str,
    /// Whether the call needs an access token.
    pub requires_token: bool,
    /// The accepted parameters.
    pub params: &'static [ParamDef],
}

impl EndpointDef {
    /// Declares a token-protected GET endpoint.
    #[must_use]
    pub const fn get(name: &'static str, path: &'static str, params: &'static [ParamDef]) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            requires_token: true,
            params,
        }
    }

    /// Declares a token-protected POST endpoint.
    #[must_use]
    pub const fn post(name: &'static str, path: &'static str, params: &'static [ParamDef]) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path,
            requires_token: true,
            params,
        }
    }

    /// Marks the endpoint as callable without a token.
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.requires_token = false;
        self
    }

    /// Returns the declaration of parameter `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'static ParamDef> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Validates caller arguments and merges them over the declared defaults.
    ///
    /// The result contains only the parameters that will be sent.
    ///
    /// # Errors
    ///
    /// - [`InvalidRequestError::UnknownParameter`] for an undeclared name
    /// - [`InvalidRequestError::InvalidValue`] for a value that does not fit
    /// - [`InvalidRequestError::MissingParameter`] when a required parameter
    ///   has neither a value nor a default
    pub fn merge_arguments(&self, args: &Params) -> Result<Params, InvalidRequestError> {
        let mut merged = Params::new();

        for (name, value) in args.iter() {
            let def = self
                .param(name)
                .ok_or_else(|| InvalidRequestError::UnknownParameter {
                    endpoint: self.name,
                    name: name.to_string(),
                })?;

            if value.is_absent() {
                continue;
            }

            let normalized =
                def.normalize(value)
                    .ok_or_else(|| InvalidRequestError::InvalidValue {
                        endpoint: self.name,
                        name: def.name,
                        value: value.to_string(),
                        expected: def.kind.to_string(),
                    })?;
            merged.insert(def.name, normalized);
        }

        for def in self.params {
            if merged.get(def.name).is_some() {
                continue;
            }
            if let Some(default) = def.default {
                merged.insert(def.name, default);
            } else if def.required {
                return Err(InvalidRequestError::MissingParameter {
                    endpoint: self.name,
                    name: def.name,
                });
            }
        }

        Ok(merged)
    }
}

/// Looks up an endpoint by logical name.
///
/// # Errors
///
/// Returns [`InvalidRequestError::UnknownEndpoint`] if no endpoint has that name.
pub fn find(name: &str) -> Result<&'static EndpointDef, InvalidRequestError> {
    CATALOG
        .iter()
        .find(|endpoint| endpoint.name == name)
        .ok_or_else(|| InvalidRequestError::UnknownEndpoint {
            name: name.to_string(),
        })
}
