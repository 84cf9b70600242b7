//! Candidate model representing a publication returned by the search provider.

use serde::{Deserialize, Serialize};

/// A publication candidate returned by the external search provider,
/// prior to filtering.
///
/// All fields beyond the title are optional; the provider decides what it
/// can supply. Candidates are read-only to the pipeline: they either pass
/// the filter stage and are promoted to [`Accepted`](crate::models::Accepted)
/// results or are discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Publication title
    pub title: String,

    /// Author full names, in provider order
    pub authors: Vec<String>,

    /// Abstract text, when the provider supplies one
    pub abstract_text: Option<String>,

    /// Publication year as reported by the provider; may be non-numeric
    pub year: Option<String>,

    /// Journal or venue name
    pub journal: Option<String>,

    /// Link to a preview copy (e.g. an open-access PDF)
    pub preview_url: Option<String>,

    /// Link to the publication page
    pub access_url: Option<String>,
}

impl Candidate {
    /// Create a candidate with only a title set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Publication year coerced to an integer.
    ///
    /// A missing or unparseable year maps to `0`, which fails any realistic
    /// year-range check.
    pub fn parsed_year(&self) -> i32 {
        self.year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .unwrap_or(0)
    }

    /// Lower-cased concatenation of title and abstract, the haystack for
    /// keyword matching. A missing abstract contributes an empty string.
    pub fn search_text(&self) -> String {
        let abstract_text = self.abstract_text.as_deref().unwrap_or("");
        format!("{} {}", self.title, abstract_text).to_lowercase()
    }

    /// Authors joined into a single display string
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// Builder for constructing Candidate records
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
    candidate: Candidate,
}

impl CandidateBuilder {
    /// Create a new builder with the required title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            candidate: Candidate::new(title),
        }
    }

    /// Add a single author
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.candidate.authors.push(name.into());
        self
    }

    /// Set the full author list
    pub fn authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate.authors = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the abstract
    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.candidate.abstract_text = Some(text.into());
        self
    }

    /// Set the raw publication year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.candidate.year = Some(year.into());
        self
    }

    /// Set the journal name
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.candidate.journal = Some(journal.into());
        self
    }

    /// Set the preview link
    pub fn preview_url(mut self, url: impl Into<String>) -> Self {
        self.candidate.preview_url = Some(url.into());
        self
    }

    /// Set the publication page link
    pub fn access_url(mut self, url: impl Into<String>) -> Self {
        self.candidate.access_url = Some(url.into());
        self
    }

    /// Build the Candidate
    pub fn build(self) -> Candidate {
        self.candidate
    }
}
