//! Terminal output for the CLI search command.
//!
//! Renders a search outcome as a table (when stdout is a terminal), JSON
//! (when piped), or a plain text listing with citation lines.

use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{Attribute, Cell, Table};
use owo_colors::OwoColorize;

use crate::models::SearchOutcome;

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format with citations
    Plain,
}

/// Print a search outcome in the requested format
pub fn print_outcome(outcome: &SearchOutcome, format: OutputFormat) {
    let actual_format = if format == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    match actual_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.results).unwrap());
        }
        OutputFormat::Plain => {
            if outcome.results.is_empty() {
                println!("No results found.");
                return;
            }
            for (idx, accepted) in outcome.results.iter().enumerate() {
                let candidate = &accepted.candidate;
                println!("{}. {}", idx + 1, candidate.title);
                println!("   Authors: {}", candidate.author_line());
                if let Some(ref journal) = candidate.journal {
                    println!("   Journal: {}", journal);
                }
                if let Some(ref url) = candidate.access_url {
                    println!("   URL: {}", url);
                }
                if let Some(ref url) = candidate.preview_url {
                    println!("   Preview: {}", url);
                }
                println!("   Citation: {}", accepted.citation);
                println!();
            }
        }
        OutputFormat::Table => {
            if outcome.results.is_empty() {
                println!("{}", "No results found.".yellow());
                return;
            }

            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["#", "Title", "Authors", "Year", "Journal"]);

            for (idx, accepted) in outcome.results.iter().enumerate() {
                let candidate = &accepted.candidate;

                let title = truncate(&candidate.title, 50);
                let authors = truncate(&candidate.author_line(), 30);
                let year = candidate.year.clone().unwrap_or_default();
                let journal = truncate(candidate.journal.as_deref().unwrap_or(""), 25);

                table.add_row(vec![
                    Cell::new(idx + 1),
                    Cell::new(title).add_attribute(Attribute::Bold),
                    Cell::new(authors),
                    Cell::new(year),
                    Cell::new(journal),
                ]);
            }
            println!("{table}");

            for (idx, accepted) in outcome.results.iter().enumerate() {
                println!("{} {}", format!("[{}]", idx + 1).cyan(), accepted.citation);
            }
        }
        OutputFormat::Auto => unreachable!(),
    }
}

/// Truncate to `max` characters with an ellipsis marker
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
