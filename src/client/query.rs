//! Request payloads for the launch-query endpoint.
//!
//! The endpoint accepts a MongoDB-style filter plus pagination options:
//!
//! ```text
//! { "query": { "$text": { "$search": "falcon" } }, "options": { "page": 2 } }
//! ```
//!
//! The `query` member is omitted entirely when no keywords are given.

use serde::Serialize;

// ============================================================================
// Launch Query
// ============================================================================

/// Keywords and page number of one launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchQuery {
    /// Free-text keywords, possibly empty.
    pub keywords: String,
    /// One-based page number.
    pub page: u32,
}

impl LaunchQuery {
    /// Creates a query. Page numbers below one are clamped to one.
    #[must_use]
    pub fn new(keywords: impl Into<String>, page: u32) -> Self {
        Self {
            keywords: keywords.into(),
            page: page.max(1),
        }
    }

    /// Builds the JSON request body for this query.
    #[must_use]
    pub fn payload(&self) -> QueryPayload<'_> {
        QueryPayload {
            query: (!self.keywords.is_empty()).then_some(TextFilter {
                text: TextSearch {
                    search: &self.keywords,
                },
            }),
            options: QueryOptions { page: self.page },
        }
    }
}

// ============================================================================
// Payload Types
// ============================================================================

/// Serialized request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<TextFilter<'a>>,
    pub options: QueryOptions,
}

/// Text-search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFilter<'a> {
    #[serde(rename = "$text")]
    pub text: TextSearch<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSearch<'a> {
    #[serde(rename = "$search")]
    pub search: &'a str,
}

/// Pagination options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    pub page: u32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_json(query: &LaunchQuery) -> String {
        serde_json::to_string(&query.payload()).unwrap()
    }

    #[test]
    fn test_empty_keywords_omit_filter() {
        let query = LaunchQuery::new("", 1);
        insta::assert_snapshot!(payload_json(&query), @r#"{"options":{"page":1}}"#);
    }

    #[test]
    fn test_keywords_add_text_search() {
        let query = LaunchQuery::new("Falcon", 3);
        insta::assert_snapshot!(
            payload_json(&query),
            @r#"{"query":{"$text":{"$search":"Falcon"}},"options":{"page":3}}"#
        );
    }

    #[test]
    fn test_keywords_are_sent_verbatim() {
        let query = LaunchQuery::new("crs \"dragon\"", 1);
        let value: serde_json::Value = serde_json::to_value(query.payload()).unwrap();
        assert_eq!(value["query"]["$text"]["$search"], "crs \"dragon\"");
        assert_eq!(value["options"]["page"], 1);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        assert_eq!(LaunchQuery::new("x", 0).page, 1);
        assert_eq!(LaunchQuery::new("x", 0).payload().options.page, 1);
    }
}
