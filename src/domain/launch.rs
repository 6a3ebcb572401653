//! Launch record types as returned by the launch-query API.
//!
//! Only the fields the explorer consumes are modelled. Unknown fields in the
//! API payload are ignored.

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Year shown for records without a usable `date_utc`.
///
/// Corresponds to the fixed launch date `2015-02-11T23:03:00.000Z`.
pub const FALLBACK_LAUNCH_YEAR: i32 = 2015;

/// Text shown in place of missing launch details.
pub const DETAILS_PLACEHOLDER: &str = "-";

// ============================================================================
// Links
// ============================================================================

/// Flickr media attached to a launch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlickrLinks {
    /// Full-size image URLs, possibly empty.
    #[serde(default)]
    pub original: Vec<String>,
}

/// External links attached to a launch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub flickr: FlickrLinks,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
}

// ============================================================================
// Launch Record
// ============================================================================

/// A single rocket flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Flight number, unique within a result set.
    pub flight_number: u32,
    /// Mission name.
    pub name: String,
    /// Free-text mission details.
    #[serde(default)]
    pub details: Option<String>,
    /// Launch date in RFC 3339 form.
    #[serde(default)]
    pub date_utc: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
}

impl LaunchRecord {
    /// Create a record with the consumed fields only.
    #[must_use]
    pub fn new(flight_number: u32, name: impl Into<String>) -> Self {
        Self {
            flight_number,
            name: name.into(),
            details: None,
            date_utc: None,
            links: LaunchLinks::default(),
        }
    }

    /// Display year of the launch.
    ///
    /// Uses the record's own `date_utc`; falls back to
    /// [`FALLBACK_LAUNCH_YEAR`] when the date is absent or malformed.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date_utc
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map_or(FALLBACK_LAUNCH_YEAR, |date| date.year())
    }

    /// Card heading, e.g. `Flight 1: Mission FalconSat (2006)`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Flight {}: Mission {} ({})",
            self.flight_number,
            self.name,
            self.year()
        )
    }

    /// Details text, or [`DETAILS_PLACEHOLDER`] when absent or blank.
    #[must_use]
    pub fn details_text(&self) -> &str {
        self.details
            .as_deref()
            .map(str::trim)
            .filter(|details| !details.is_empty())
            .unwrap_or(DETAILS_PLACEHOLDER)
    }

    /// Image shown on the card.
    #[must_use]
    pub fn image(&self) -> ImageSource<'_> {
        match self.links.flickr.original.first() {
            Some(url) if !url.is_empty() => ImageSource::Remote(url),
            _ => ImageSource::Placeholder,
        }
    }

    /// Best external link for the launch: webcast, wikipedia, article, then
    /// the first image.
    #[must_use]
    pub fn primary_link(&self) -> Option<&str> {
        [
            self.links.webcast.as_deref(),
            self.links.wikipedia.as_deref(),
            self.links.article.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .or(match self.image() {
            ImageSource::Remote(url) => Some(url),
            ImageSource::Placeholder => None,
        })
    }
}

/// Where a card's image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// First flickr image of the launch.
    Remote(&'a str),
    /// Bundled placeholder art.
    Placeholder,
}

// ============================================================================
// Launch Page
// ============================================================================

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPage {
    /// Records on this page, in API order.
    pub docs: Vec<LaunchRecord>,
    /// Whether a subsequent page exists.
    pub has_next_page: bool,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl LaunchPage {
    /// Create a page without pagination metadata.
    #[must_use]
    pub fn new(docs: Vec<LaunchRecord>, has_next_page: bool) -> Self {
        Self {
            docs,
            has_next_page,
            total_docs: None,
            page: None,
            total_pages: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
