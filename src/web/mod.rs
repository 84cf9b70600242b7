//! Web interface: a single search page plus JSON endpoints.
//!
//! `GET /` serves the search form, `POST /search` runs the pipeline
//! synchronously and stores the outcome in a single-slot session store,
//! `GET /results` re-renders whatever the last search produced. Each new
//! search replaces the stored outcome wholesale; concurrent searches are
//! not guarded against beyond the mutex on the slot.

mod page;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::info;
use warp::{Filter, Reply};

use crate::config::Config;
use crate::format::highlight::highlight;
use crate::models::{Accepted, SearchError, SearchOutcome, SearchParams};
use crate::pipeline::run_search;
use crate::provider::Provider;

/// The last computed search outcome, replaced wholesale by each search
type ResultSlot = Arc<Mutex<Option<SearchOutcome>>>;

/// One result row as the page renders it.
///
/// Built per render from an [`Accepted`] result: the highlighted abstract
/// is computed here and never stored. Absent links serialize as `null`
/// and the page omits them.
#[derive(Debug, Serialize)]
pub struct DisplayResult {
    pub title: String,
    pub authors: String,
    pub abstract_text: String,
    pub access_url: Option<String>,
    pub preview_url: Option<String>,
    pub citation: String,
}

#[derive(Debug, Serialize)]
struct SearchReply {
    status: String,
    message: String,
    query: String,
    results: Vec<DisplayResult>,
}

impl SearchReply {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            status: "warning".to_string(),
            message: message.into(),
            query: String::new(),
            results: Vec::new(),
        }
    }

    fn empty() -> Self {
        Self {
            status: "empty".to_string(),
            message: String::new(),
            query: String::new(),
            results: Vec::new(),
        }
    }
}

/// Build the display view of one accepted result, applying keyword
/// highlighting to the abstract
fn display_result(accepted: &Accepted, query: &str) -> DisplayResult {
    let candidate = &accepted.candidate;
    let abstract_text = candidate
        .abstract_text
        .as_deref()
        .unwrap_or("No abstract available");

    DisplayResult {
        title: candidate.title.clone(),
        authors: candidate.author_line(),
        abstract_text: highlight(abstract_text, query),
        access_url: candidate.access_url.clone(),
        preview_url: candidate.preview_url.clone(),
        citation: accepted.citation.clone(),
    }
}

fn render_outcome(outcome: &SearchOutcome) -> SearchReply {
    let results: Vec<DisplayResult> = outcome
        .results
        .iter()
        .map(|accepted| display_result(accepted, &outcome.query))
        .collect();

    let message = if results.is_empty() {
        "No results found.".to_string()
    } else {
        format!("Found {} results", results.len())
    };

    SearchReply {
        status: "ok".to_string(),
        message,
        query: outcome.query.clone(),
        results,
    }
}

/// Start the web server and block until it exits
pub async fn start_web_server(provider: Arc<dyn Provider>, config: &Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let page_size = config.provider.page_size;
    let slot: ResultSlot = Arc::new(Mutex::new(None));

    let slot_filter = warp::any().map(move || slot.clone());
    let provider_filter = warp::any().map(move || provider.clone());
    let page_size_filter = warp::any().map(move || page_size);

    let page_html = page::index_html(&config.search);
    let index = warp::get()
        .and(warp::path::end())
        .map(move || warp::reply::html(page_html.clone()));

    let search = warp::post()
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and(provider_filter)
        .and(slot_filter.clone())
        .and(page_size_filter)
        .and_then(handle_search);

    let results = warp::get()
        .and(warp::path("results"))
        .and(warp::path::end())
        .and(slot_filter)
        .and_then(handle_results);

    let routes = index.or(search).or(results);

    info!("Web interface running on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}

async fn handle_search(
    params: SearchParams,
    provider: Arc<dyn Provider>,
    slot: ResultSlot,
    page_size: usize,
) -> Result<impl Reply, warp::Rejection> {
    match run_search(provider.as_ref(), &params, page_size).await {
        Ok(outcome) => {
            let reply = render_outcome(&outcome);
            let mut guard = slot.lock().unwrap();
            *guard = Some(outcome);
            Ok(warp::reply::json(&reply))
        }
        // An empty query leaves the stored prior outcome untouched
        Err(SearchError::EmptyQuery) => Ok(warp::reply::json(&SearchReply::warning(
            "Please enter search keywords.",
        ))),
    }
}

async fn handle_results(slot: ResultSlot) -> Result<impl Reply, warp::Rejection> {
    let guard = slot.lock().unwrap();
    let reply = match guard.as_ref() {
        Some(outcome) => render_outcome(outcome),
        None => SearchReply::empty(),
    };
    Ok(warp::reply::json(&reply))
}
