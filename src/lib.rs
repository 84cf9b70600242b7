//! # Scholar Search
//!
//! An interactive web UI and CLI for searching academic publications:
//! a keyword query goes to an external academic search provider, candidate
//! records are filtered by publication year and keyword presence, and
//! accepted results are rendered with an APA-style citation and a
//! keyword-highlighted abstract.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Candidate, SearchParams, SearchOutcome)
//! - [`provider`]: Search provider abstraction, lazy candidate cursor, and
//!   the Semantic Scholar adapter
//! - [`pipeline`]: The query → filter → format pipeline
//! - [`format`]: Citation and highlight formatters
//! - [`web`]: The warp-based web interface
//! - [`ui`]: Terminal output for CLI searches
//! - [`config`]: Configuration management

pub mod config;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod ui;
pub mod web;

// Re-export commonly used types
pub use models::{Accepted, Candidate, SearchOutcome, SearchParams};
pub use provider::{Provider, ScholarProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
