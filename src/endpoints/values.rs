//! Enumerated parameter values.
//!
//! Each enum mirrors one value set accepted by the API. The `NAMES` constants
//! are what the catalog validates against; the enums give callers a typed way
//! to produce the same strings.

use std::fmt;

use crate::clients::ParamValue;

/// Time unit for metrics endpoints (`unit` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Per minute.
    Minute,
    /// Per hour.
    Hour,
    /// Per day.
    #[default]
    Day,
    /// Per week.
    Week,
    /// Per month.
    Month,
}

impl TimeUnit {
    /// Every accepted wire value.
    pub const NAMES: &'static [&'static str] = &["minute", "hour", "day", "week", "month"];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// Short domain used by `shorten` (`domain` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortDomain {
    /// `bit.ly`
    BitLy,
    /// `j.mp`
    JMp,
    /// `bitly.com`
    BitlyCom,
}

impl ShortDomain {
    /// Every accepted wire value.
    pub const NAMES: &'static [&'static str] = &["bit.ly", "j.mp", "bitly.com"];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BitLy => "bit.ly",
            Self::JMp => "j.mp",
            Self::BitlyCom => "bitly.com",
        }
    }
}

/// Three-way filter used by link history (`archived`, `private`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFilter {
    /// Only matching links.
    On,
    /// Only non-matching links.
    Off,
    /// All links.
    Both,
}

impl LinkFilter {
    /// Every accepted wire value.
    pub const NAMES: &'static [&'static str] = &["on", "off", "both"];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Both => "both",
        }
    }
}

/// Content type returned by `link_content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Raw HTML.
    Html,
    /// Extracted text.
    Text,
}

impl ContentType {
    /// Every accepted wire value.
    pub const NAMES: &'static [&'static str] = &["html", "text"];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

/// Result fields selectable on `search` (`fields` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SearchField {
    AggregateLink,
    Cities,
    Content,
    Description,
    Domain,
    H2,
    H3,
    Initial,
    InitialEpoch,
    Keywords,
    Lang,
    LastIndexedEpoch,
    LastIndexed,
    LastSeen,
    OgTitle,
    Page,
    Referrer,
    Score,
    Site,
    SummaryText,
    SummaryTitle,
    Title,
    Type,
    Url,
}

impl SearchField {
    /// Every accepted wire value.
    pub const NAMES: &'static [&'static str] = &[
        "aggregate_link",
        "cities",
        "content",
        "description",
        "domain",
        "h2",
        "h3",
        "initial",
        "initial_epoch",
        "keywords",
        "lang",
        "last_indexed_epoch",
        "lastindexed",
        "lastseen",
        "ogtitle",
        "page",
        "referrer",
        "score",
        "site",
        "summaryText",
        "summaryTitle",
        "title",
        "type",
        "url",
    ];

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AggregateLink => "aggregate_link",
            Self::Cities => "cities",
            Self::Content => "content",
            Self::Description => "description",
            Self::Domain => "domain",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Initial => "initial",
            Self::InitialEpoch => "initial_epoch",
            Self::Keywords => "keywords",
            Self::Lang => "lang",
            Self::LastIndexedEpoch => "last_indexed_epoch",
            Self::LastIndexed => "lastindexed",
            Self::LastSeen => "lastseen",
            Self::OgTitle => "ogtitle",
            Self::Page => "page",
            Self::Referrer => "referrer",
            Self::Score => "score",
            Self::Site => "site",
            Self::SummaryText => "summaryText",
            Self::SummaryTitle => "summaryTitle",
            Self::Title => "title",
            Self::Type => "type",
            Self::Url => "url",
        }
    }
}

impl From<&[SearchField]> for ParamValue {
    fn from(fields: &[SearchField]) -> Self {
        Self::List(fields.iter().map(|f| f.as_str().to_string()).collect())
    }
}

impl From<Vec<SearchField>> for ParamValue {
    fn from(fields: Vec<SearchField>) -> Self {
        Self::from(fields.as_slice())
    }
}

// Display and ParamValue conversions shared by the single-valued enums.
macro_rules! wire_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.as_str().to_string())
                }
            }
        )*
    };
}

wire_value!(TimeUnit, ShortDomain, LinkFilter, ContentType, SearchField);
