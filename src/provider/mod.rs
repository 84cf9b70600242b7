//! Search provider abstraction.
//!
//! The external academic search service is modeled as a [`Provider`] that
//! serves pages of [`Candidate`] records in provider-defined relevance
//! order. [`CandidateCursor`] turns those paged fetches into the lazy,
//! forward-only sequence the filter stage consumes: elements are pulled
//! one at a time, each is consumed exactly once, and the sequence signals
//! exhaustion explicitly instead of blocking.

mod cursor;
pub mod mock;
mod scholar;

pub use cursor::CandidateCursor;
pub use mock::MockProvider;
pub use scholar::ScholarProvider;

use async_trait::async_trait;

use crate::models::Candidate;

/// A remote academic search service.
///
/// Implementations fetch one page of results at a time; the retrieval
/// protocol behind `fetch_page` is the provider's own business.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this provider (e.g. "scholar")
    fn id(&self) -> &str;

    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Fetch one page of candidates for `query`, starting at `offset`.
    ///
    /// An empty page means the provider has no further results for this
    /// query.
    async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        page_size: usize,
    ) -> Result<Vec<Candidate>, ProviderError>;
}

/// Errors that can occur when talking to a provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network or HTTP error
    #[error("network error: {0}")]
    Network(String),

    /// Error response from the provider's API
    #[error("provider API error: {0}")]
    Api(String),

    /// Response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(format!("JSON: {}", err))
    }
}
