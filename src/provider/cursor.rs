//! Lazy cursor over a provider's candidate sequence.

use std::collections::VecDeque;

use tracing::warn;

use crate::models::Candidate;
use crate::provider::Provider;

/// A forward-only cursor over the candidate sequence a provider returns
/// for one query.
///
/// Candidates are pulled one at a time; the cursor refills its buffer a
/// page at a time from the provider. The sequence is not restartable.
/// A provider failure ends the sequence instead of propagating: the
/// caller sees exhaustion and can still return a partially filled result
/// set. No retry, no backoff.
pub struct CandidateCursor<'a> {
    provider: &'a dyn Provider,
    query: String,
    page_size: usize,
    offset: usize,
    buffer: VecDeque<Candidate>,
    done: bool,
}

impl<'a> CandidateCursor<'a> {
    /// Open a cursor for `query` against `provider`
    pub fn new(provider: &'a dyn Provider, query: impl Into<String>, page_size: usize) -> Self {
        Self {
            provider,
            query: query.into(),
            page_size: page_size.max(1),
            offset: 0,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Whether the provider has signalled the end of its results (or has
    /// failed, which this cursor treats the same way)
    pub fn is_exhausted(&self) -> bool {
        self.done && self.buffer.is_empty()
    }

    /// Pull the next candidate, fetching the next page when the buffer
    /// runs dry. Returns `None` once the sequence is exhausted.
    pub async fn next(&mut self) -> Option<Candidate> {
        if self.buffer.is_empty() && !self.done {
            self.fetch_next_page().await;
        }
        self.buffer.pop_front()
    }

    async fn fetch_next_page(&mut self) {
        match self
            .provider
            .fetch_page(&self.query, self.offset, self.page_size)
            .await
        {
            Ok(page) => {
                if page.is_empty() {
                    self.done = true;
                } else {
                    self.offset += page.len();
                    self.buffer.extend(page);
                }
            }
            Err(e) => {
                warn!(
                    provider = self.provider.id(),
                    error = %e,
                    "provider fetch failed, ending candidate sequence"
                );
                self.done = true;
            }
        }
    }
}
