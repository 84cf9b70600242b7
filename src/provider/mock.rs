//! Mock provider for testing purposes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{Candidate, CandidateBuilder};
use crate::provider::{Provider, ProviderError};

/// A scripted provider that serves queued responses.
///
/// Each `fetch_page` call consumes the next queued response; an empty
/// queue yields empty pages, i.e. exhaustion.
#[derive(Debug, Default)]
pub struct MockProvider {
    responses: Mutex<VecDeque<Result<Vec<Candidate>, ProviderError>>>,
}

impl MockProvider {
    /// Create a mock provider with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider serving all `candidates` in a single page
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        let provider = Self::new();
        provider.push_page(candidates);
        provider
    }

    /// Queue a page of candidates
    pub fn push_page(&self, page: Vec<Candidate>) {
        self.responses.lock().unwrap().push_back(Ok(page));
    }

    /// Queue a provider failure
    pub fn push_error(&self, error: ProviderError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Provider"
    }

    async fn fetch_page(
        &self,
        _query: &str,
        _offset: usize,
        _page_size: usize,
    ) -> Result<Vec<Candidate>, ProviderError> {
        let mut queue = self.responses.lock().unwrap();
        queue.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Helper to build a minimal candidate for tests
pub fn make_candidate(title: &str, year: &str) -> Candidate {
    CandidateBuilder::new(title)
        .author("Jane Doe")
        .year(year)
        .journal("J. Test")
        .build()
}
