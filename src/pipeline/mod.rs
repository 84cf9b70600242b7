//! The search pipeline: provider query, filter stage, format stage.
//!
//! One invocation of [`run_search`] runs the three stages synchronously to
//! completion and returns an explicit [`SearchOutcome`] value; the
//! pipeline itself holds no state between invocations.

mod filter;

pub use filter::candidate_matches;

use tracing::{debug, info, warn};

use crate::format::citation::{format_citation, CitationError};
use crate::models::{Accepted, SearchError, SearchOutcome, SearchParams};
use crate::provider::{CandidateCursor, Provider};

/// Fallback citation text for records that cannot be cited
pub const CITATION_UNAVAILABLE: &str = "Citation unavailable";

/// Ceiling on candidates examined, as a multiple of the requested limit.
/// The provider sequence is effectively unbounded; without this ceiling a
/// query with rare matches would scan it forever.
const LOOKAHEAD_FACTOR: usize = 3;

/// Run one search invocation to completion.
///
/// Pulls candidates lazily from the provider, keeps those whose year falls
/// inside the inclusive bounds and whose title + abstract contain every
/// query word, and decorates each accepted record with its citation. At
/// most `limit * 3` candidates are examined, so a query with rare matches
/// can come back with fewer than `limit` results; that is expected
/// behavior, not an error. Provider exhaustion (including a provider
/// failure, which the cursor degrades to exhaustion) likewise yields a
/// short result list.
pub async fn run_search(
    provider: &dyn Provider,
    params: &SearchParams,
    page_size: usize,
) -> Result<SearchOutcome, SearchError> {
    params.validate()?;

    let limit = params.clamped_limit();
    let tokens = params.query_tokens();
    let max_pulls = limit * LOOKAHEAD_FACTOR;

    info!(
        provider = provider.name(),
        query = %params.query,
        limit,
        year_start = params.year_start,
        year_end = params.year_end,
        "starting search"
    );

    let mut cursor = CandidateCursor::new(provider, params.query.as_str(), page_size);
    let mut results = Vec::new();
    let mut examined = 0;

    while examined < max_pulls && results.len() < limit {
        let Some(candidate) = cursor.next().await else {
            break;
        };
        examined += 1;

        if !candidate_matches(&candidate, &tokens, params.year_start, params.year_end) {
            debug!(title = %candidate.title, "candidate rejected");
            continue;
        }

        let citation = match format_citation(&candidate) {
            Ok(citation) => citation,
            Err(CitationError::EmptyAuthorList) => {
                warn!(title = %candidate.title, "record has no authors, citation unavailable");
                CITATION_UNAVAILABLE.to_string()
            }
        };

        results.push(Accepted { candidate, citation });
    }

    info!(accepted = results.len(), examined, "search finished");

    Ok(SearchOutcome {
        query: params.query.clone(),
        results,
        examined,
        exhausted: cursor.is_exhausted(),
    })
}
