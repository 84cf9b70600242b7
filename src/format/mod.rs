//! Display formatting: APA citations and query-term highlighting.

pub mod citation;
pub mod highlight;

pub use citation::{format_citation, CitationError};
pub use highlight::highlight;
