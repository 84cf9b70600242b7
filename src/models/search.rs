//! Search parameter and result models.

use serde::{Deserialize, Serialize};

use crate::models::Candidate;

/// Parameters for one search invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text keyword query
    pub query: String,

    /// Maximum number of results to return (1-100)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Earliest publication year to accept (inclusive)
    #[serde(default = "default_year_start")]
    pub year_start: i32,

    /// Latest publication year to accept (inclusive)
    #[serde(default = "default_year_end")]
    pub year_end: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            limit: default_limit(),
            year_start: default_year_start(),
            year_end: default_year_end(),
        }
    }
}

fn default_limit() -> usize {
    10
}

fn default_year_start() -> i32 {
    2000
}

fn default_year_end() -> i32 {
    2024
}

impl SearchParams {
    /// Create parameters for a query, with default limit and year bounds
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the result limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the inclusive year bounds
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.year_start = start;
        self.year_end = end;
        self
    }

    /// The limit clamped into the supported 1-100 range. The form inputs
    /// enforce the same range; the pipeline re-applies it for callers that
    /// bypass the form.
    pub fn clamped_limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }

    /// Lower-cased whitespace-split tokens of the query, as consumed by
    /// the filter stage.
    pub fn query_tokens(&self) -> Vec<String> {
        self.query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Reject parameters that cannot be searched. An inverted year range
    /// is not an error; it simply matches nothing.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(())
    }
}

/// Errors surfaced to the caller of a search invocation
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The query text is empty; no search is executed
    #[error("search query is empty")]
    EmptyQuery,
}

/// A candidate that passed the filter stage, decorated with its citation.
///
/// The abstract is carried unmodified; keyword highlighting is applied at
/// render time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accepted {
    /// The underlying candidate record
    pub candidate: Candidate,

    /// APA-style citation text, or the fallback when the record cannot
    /// be cited
    pub citation: String,
}

/// The complete result of one search invocation.
///
/// Replaces the prior result set wholesale; the pipeline holds no state
/// between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The query that produced these results
    pub query: String,

    /// Accepted results in provider order, at most `limit` of them
    pub results: Vec<Accepted>,

    /// Number of candidates pulled from the provider
    pub examined: usize,

    /// Whether the provider ran out of candidates before the lookahead
    /// ceiling was reached
    pub exhausted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SearchParams::new("stem cells");
        assert_eq!(params.query, "stem cells");
        assert_eq!(params.limit, 10);
        assert_eq!(params.year_start, 2000);
        assert_eq!(params.year_end, 2024);
    }

    #[test]
    fn test_builder_setters() {
        let params = SearchParams::new("graphs").limit(25).year_range(1990, 1995);
        assert_eq!(params.limit, 25);
        assert_eq!(params.year_start, 1990);
        assert_eq!(params.year_end, 1995);
    }

    #[test]
    fn test_clamped_limit() {
        assert_eq!(SearchParams::new("q").limit(0).clamped_limit(), 1);
        assert_eq!(SearchParams::new("q").limit(10).clamped_limit(), 10);
        assert_eq!(SearchParams::new("q").limit(500).clamped_limit(), 100);
    }

    #[test]
    fn test_query_tokens() {
        let params = SearchParams::new("  Stem   CELLS ");
        assert_eq!(params.query_tokens(), vec!["stem", "cells"]);
    }

    #[test]
    fn test_validate_empty_query() {
        assert_eq!(
            SearchParams::new("").validate(),
            Err(SearchError::EmptyQuery)
        );
        assert_eq!(
            SearchParams::new("   ").validate(),
            Err(SearchError::EmptyQuery)
        );
        assert!(SearchParams::new("graphs").validate().is_ok());
    }

    #[test]
    fn test_inverted_year_range_is_not_rejected() {
        let params = SearchParams::new("graphs").year_range(2024, 2000);
        assert!(params.validate().is_ok());
    }
}
