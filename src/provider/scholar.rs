//! Semantic Scholar search provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::models::{Candidate, CandidateBuilder};
use crate::provider::{Provider, ProviderError};

const SCHOLAR_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

const SEARCH_FIELDS: &str = "title,abstract,year,venue,authors,url,openAccessPdf";

/// Academic search backed by the Semantic Scholar Graph API.
///
/// Serves relevance-ordered result pages via offset paging. Requests are
/// made without a timeout on the search path: a hanging provider blocks
/// the invocation, which is the accepted contract for this pipeline.
#[derive(Debug, Clone)]
pub struct ScholarProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScholarProvider {
    /// Create a provider against the public Semantic Scholar API
    pub fn new() -> Self {
        Self::with_base_url(SCHOLAR_API_BASE)
    }

    /// Create a provider against a custom base URL (used by tests and
    /// self-hosted mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .user_agent(concat!(
                    env!("CARGO_PKG_NAME"),
                    "/",
                    env!("CARGO_PKG_VERSION")
                ))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: std::env::var("SCHOLAR_API_KEY").ok(),
        }
    }

    /// Set an API key (optional, for higher rate limits)
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add the API key header if one is configured
    fn add_api_key_if_present(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref key) = self.api_key {
            builder.header("x-api-key", key)
        } else {
            builder
        }
    }

    /// Map one wire record into a Candidate
    fn parse_candidate(data: ApiPaper) -> Candidate {
        let mut builder = CandidateBuilder::new(data.title.unwrap_or_default())
            .authors(data.authors.into_iter().filter_map(|a| a.name));

        if let Some(abstract_text) = data.r#abstract {
            builder = builder.abstract_text(abstract_text);
        }
        if let Some(year) = data.year {
            builder = builder.year(year.to_string());
        }
        if let Some(venue) = data.venue.filter(|v| !v.is_empty()) {
            builder = builder.journal(venue);
        }
        if let Some(url) = data.url {
            builder = builder.access_url(url);
        }
        if let Some(pdf_url) = data.open_access_pdf.and_then(|p| p.url) {
            builder = builder.preview_url(pdf_url);
        }

        builder.build()
    }
}

impl Default for ScholarProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for ScholarProvider {
    fn id(&self) -> &str {
        "scholar"
    }

    fn name(&self) -> &str {
        "Semantic Scholar"
    }

    async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        page_size: usize,
    ) -> Result<Vec<Candidate>, ProviderError> {
        let url = format!(
            "{}/paper/search?query={}&offset={}&limit={}&fields={}",
            self.base_url,
            urlencoding::encode(query),
            offset,
            page_size,
            SEARCH_FIELDS
        );

        let response = self
            .add_api_key_if_present(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ProviderError::Api(format!(
                "search returned status {}",
                response.status()
            )));
        }

        let page: SearchPage = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("failed to parse JSON: {}", e)))?;

        Ok(page.data.into_iter().map(Self::parse_candidate).collect())
    }
}

// ===== Semantic Scholar API wire types =====

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<ApiPaper>,
}

#[derive(Debug, Deserialize)]
struct ApiPaper {
    title: Option<String>,
    r#abstract: Option<String>,
    year: Option<i32>,
    venue: Option<String>,
    url: Option<String>,
    #[serde(default)]
    authors: Vec<ApiAuthor>,
    #[serde(rename = "openAccessPdf")]
    open_access_pdf: Option<ApiOpenAccessPdf>,
}

#[derive(Debug, Deserialize)]
struct ApiAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiOpenAccessPdf {
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "total": 2,
        "offset": 0,
        "data": [
            {
                "paperId": "abc123",
                "title": "Stem Cell Regeneration",
                "abstract": "Stem cells regenerate tissue.",
                "year": 2021,
                "venue": "Cell Reports",
                "url": "https://example.org/abc123",
                "openAccessPdf": {"url": "https://example.org/abc123.pdf"},
                "authors": [{"name": "Jane Doe"}, {"name": "John Smith"}]
            },
            {
                "paperId": "def456",
                "title": "Untitled Notes",
                "abstract": null,
                "year": null,
                "venue": "",
                "url": null,
                "openAccessPdf": null,
                "authors": []
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_page_parses_candidates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/paper/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SEARCH_BODY)
            .create_async()
            .await;

        let provider = ScholarProvider::with_base_url(server.url());
        let page = provider.fetch_page("stem cells", 0, 20).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.len(), 2);

        let first = &page[0];
        assert_eq!(first.title, "Stem Cell Regeneration");
        assert_eq!(first.authors, vec!["Jane Doe", "John Smith"]);
        assert_eq!(first.year, Some("2021".to_string()));
        assert_eq!(first.journal, Some("Cell Reports".to_string()));
        assert_eq!(
            first.preview_url,
            Some("https://example.org/abc123.pdf".to_string())
        );
        assert_eq!(
            first.access_url,
            Some("https://example.org/abc123".to_string())
        );

        let second = &page[1];
        assert!(second.authors.is_empty());
        assert!(second.year.is_none());
        assert!(second.journal.is_none());
        assert!(second.access_url.is_none());
    }

    #[tokio::test]
    async fn test_fetch_page_passes_offset_and_limit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/paper/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("query".into(), "stem cells".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "40".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total": 0, "offset": 40, "data": []}"#)
            .create_async()
            .await;

        let provider = ScholarProvider::with_base_url(server.url());
        let page = provider.fetch_page("stem cells", 40, 20).await.unwrap();

        mock.assert_async().await;
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/paper/search")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let provider = ScholarProvider::with_base_url(server.url());
        let result = provider.fetch_page("stem cells", 0, 20).await;

        assert!(matches!(result, Err(ProviderError::Api(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/paper/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let provider = ScholarProvider::with_base_url(server.url());
        let result = provider.fetch_page("stem cells", 0, 20).await;

        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }
}
